use crate::dashboards::OverviewDashboard;
use crate::domain::a001_news::ui::list::NewsPage;
use crate::layout::left::sidebar::HOME_PATH;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn ProtectedLayout() -> impl IntoView {
    view! {
        <RequireAuth>
            <Shell />
        </RequireAuth>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Halaman tidak ditemukan."</p>
            <a href=HOME_PATH>"Kembali ke dashboard"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=|| view! { <Redirect path=HOME_PATH /> } />
                <Route path=path!("/auth/login") view=LoginPage />
                <ParentRoute path=path!("/protected") view=ProtectedLayout>
                    <Route path=path!("") view=OverviewDashboard />
                    <Route path=path!("berita") view=NewsPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
