pub mod global_context;
pub mod global_loader;
pub mod header;
pub mod left;

use global_loader::GlobalLoader;
use leptos::prelude::*;
use leptos_router::components::Outlet;

/// Application shell for signed-in pages.
///
/// ```text
/// +-----------+------------------------------+
/// |           |  Header (breadcrumb)         |
/// |  Sidebar  +------------------------------+
/// |           |  Routed page (Outlet)        |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <GlobalLoader />
        <div class="app-layout">
            <left::Left>
                <left::Sidebar />
            </left::Left>

            <div class="app-main">
                <header::Header />
                <main data-zone="center" class="app-content">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}
