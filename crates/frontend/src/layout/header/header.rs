use crate::layout::global_context::AppGlobalContext;
use crate::layout::header::breadcrumb::breadcrumbs;
use crate::layout::left::sidebar::HOME_PATH;
use crate::shared::date_utils::current_year;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

const BRAND: &str = "RTQ AL-HIKMAH";

/// Site header: sidebar toggle, breadcrumb and copyright line
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let location = use_location();
    let crumbs = Memo::new(move |_| location.pathname.with(|p| breadcrumbs(p)));
    let at_home = move || crumbs.with(Vec::is_empty);

    view! {
        <header data-zone="header" class="header">
            <button
                class="button button--ghost"
                aria-label="Toggle sidebar"
                on:click=move |_| ctx.toggle_left()
            >
                {icon("menu")}
            </button>
            <span class="header__brand">{BRAND}</span>

            <nav class="breadcrumb" aria-label="Breadcrumb">
                <Show
                    when=at_home
                    fallback=|| view! { <a class="breadcrumb__link" href=HOME_PATH>"Home"</a> }
                >
                    <span class="breadcrumb__current">"Home"</span>
                </Show>
                {move || {
                    let crumbs = crumbs.get();
                    let last = crumbs.len().saturating_sub(1);
                    crumbs
                        .into_iter()
                        .enumerate()
                        .map(|(i, crumb)| {
                            let label = if i == last {
                                view! { <span class="breadcrumb__current">{crumb.label}</span> }.into_any()
                            } else {
                                view! { <a class="breadcrumb__link" href=crumb.href>{crumb.label}</a> }.into_any()
                            };
                            view! {
                                <span class="breadcrumb__separator">"/"</span>
                                {label}
                            }
                        })
                        .collect_view()
                }}
            </nav>

            <div class="header__copyright">
                {format!("© {} {}. All rights reserved.", current_year(), BRAND)}
            </div>
        </header>
    }
}
