use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Thin progress bar at the top of the page, shown while any request
/// registered in [`AppGlobalContext`] is in flight.
#[component]
pub fn GlobalLoader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div
            class="global-loader"
            class:global-loader--active=move || ctx.is_loading()
            role="progressbar"
            aria-hidden=move || (!ctx.is_loading()).to_string()
        >
            <div class="global-loader__bar"></div>
        </div>
    }
}
