use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    /// False until the stored session has been validated (or found missing).
    pub session_checked: bool,
}

impl AuthState {
    pub fn signed_in(access_token: String, user_info: UserInfo) -> Self {
        Self {
            access_token: Some(access_token),
            user_info: Some(user_info),
            session_checked: true,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            session_checked: true,
            ..Self::default()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

/// Validates the stored access token, falling back to the refresh token.
/// Clears storage when neither works.
async fn restore_session() -> AuthState {
    let Some(access_token) = storage::get_access_token() else {
        return AuthState::signed_out();
    };

    match api::get_current_user(&access_token).await {
        Ok(user_info) => return AuthState::signed_in(access_token, user_info),
        Err(e) => log::debug!("stored access token rejected: {}", e),
    }

    let Some(refresh_token) = storage::get_refresh_token() else {
        storage::clear_tokens();
        return AuthState::signed_out();
    };

    match api::refresh_token(refresh_token).await {
        Ok(response) => {
            storage::save_access_token(&response.access_token);
            match api::get_current_user(&response.access_token).await {
                Ok(user_info) => AuthState::signed_in(response.access_token, user_info),
                Err(e) => {
                    log::warn!("user lookup after refresh failed: {}", e);
                    storage::clear_tokens();
                    AuthState::signed_out()
                }
            }
        }
        Err(e) => {
            log::info!("session expired: {}", e);
            storage::clear_tokens();
            AuthState::signed_out()
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    spawn_local(async move {
        let state = restore_session().await;
        if let Some(user) = &state.user_info {
            log::info!("session restored for {}", user.username);
        }
        set_auth_state.set(state);
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Login, store the tokens and publish the new state
pub async fn do_login(
    username: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), api::AuthApiError> {
    let response = api::login(username, password).await?;

    storage::save_access_token(&response.access_token);
    storage::save_refresh_token(&response.refresh_token);

    log::info!("signed in as {}", response.user.username);
    set_auth_state.set(AuthState::signed_in(response.access_token, response.user));

    Ok(())
}

/// Revoke the refresh token (best effort) and forget the session
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(refresh_token) = storage::get_refresh_token() {
        if let Err(e) = api::logout(refresh_token).await {
            log::warn!("logout request failed: {}", e);
        }
    }

    storage::clear_tokens();
    set_auth_state.set(AuthState::signed_out());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_still_checking() {
        let state = AuthState::default();
        assert!(!state.session_checked);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn signed_out_state_is_checked_and_anonymous() {
        let state = AuthState::signed_out();
        assert!(state.session_checked);
        assert!(state.user_info.is_none());
    }
}
