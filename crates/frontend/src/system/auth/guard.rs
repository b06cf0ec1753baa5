use leptos::prelude::*;
use leptos_router::components::Redirect;
use thaw::{Spinner, SpinnerSize};

use super::context::use_auth;

pub const LOGIN_PATH: &str = "/auth/login";

/// Renders `children` for signed-in users and redirects everyone else to
/// the login page once the stored session has been checked.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let checked = move || auth_state.with(|s| s.session_checked);
    let signed_in = move || auth_state.with(|s| s.is_authenticated());

    let fallback = move || {
        move || {
            if checked() {
                view! { <Redirect path=LOGIN_PATH /> }.into_any()
            } else {
                view! {
                    <div class="auth-loading">
                        <Spinner size=SpinnerSize::Small />
                    </div>
                }
                .into_any()
            }
        }
    };

    view! {
        <Show when=signed_in fallback=fallback>
            {children()}
        </Show>
    }
}
