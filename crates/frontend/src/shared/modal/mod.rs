use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Line under the title
    #[prop(optional, into)]
    subtitle: Option<Signal<String>>,
    /// Escape, overlay click and the close button all end up here
    on_close: Callback<()>,
    /// Content placed next to the close button
    #[prop(optional)]
    header_extra: Option<ChildrenFn>,
    #[prop(optional)] footer: Option<ChildrenFn>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                <div class="modal-header">
                    <div class="modal-header-text">
                        <h2 class="modal-title">{title}</h2>
                        {subtitle.map(|s| view! { <p class="modal-subtitle">{move || s.get()}</p> })}
                    </div>
                    <div class="modal-header-actions">
                        {header_extra.as_ref().map(|extra| extra())}
                        <button
                            class="button button--icon modal__close"
                            aria-label="Tutup"
                            on:click=move |_| on_close.run(())
                        >
                            {icon("x")}
                        </button>
                    </div>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {footer.as_ref().map(|footer| view! {
                    <div class="modal-footer">{footer()}</div>
                })}
            </div>
        </div>
    }
}
