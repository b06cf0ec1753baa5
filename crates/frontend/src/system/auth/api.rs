//! Calls to `/api/system/auth/*`.
//!
//! Every call goes through [`send`], which turns transport failures and
//! non-2xx answers into an [`AuthApiError`].

use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::shared::api_utils::api_url;

#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("server tidak dapat dihubungi: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("username atau password salah")]
    Unauthorized,
    #[error("server menolak permintaan ({0})")]
    Status(u16),
}

impl AuthApiError {
    /// Error for a response outside the 2xx range.
    fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::Unauthorized,
            other => Self::Status(other),
        }
    }
}

async fn send(request: Request) -> Result<Response, AuthApiError> {
    let response = request.send().await?;
    if response.ok() {
        Ok(response)
    } else {
        Err(AuthApiError::from_status(response.status()))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AuthApiError> {
    Ok(response.json::<T>().await?)
}

pub async fn login(username: String, password: String) -> Result<LoginResponse, AuthApiError> {
    let request = Request::post(&api_url("/api/system/auth/login"))
        .json(&LoginRequest { username, password })?;
    decode(send(request).await?).await
}

pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, AuthApiError> {
    let request = Request::post(&api_url("/api/system/auth/refresh"))
        .json(&RefreshRequest { refresh_token })?;
    decode(send(request).await?).await
}

/// Revokes the refresh token on the server.
pub async fn logout(refresh_token: String) -> Result<(), AuthApiError> {
    let request = Request::post(&api_url("/api/system/auth/logout"))
        .json(&RefreshRequest { refresh_token })?;
    send(request).await.map(drop)
}

pub async fn get_current_user(access_token: &str) -> Result<UserInfo, AuthApiError> {
    let request = Request::get(&api_url("/api/system/auth/me"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .build()?;
    decode(send(request).await?).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_credentials_map_to_unauthorized() {
        assert!(matches!(AuthApiError::from_status(401), AuthApiError::Unauthorized));
        assert!(matches!(AuthApiError::from_status(403), AuthApiError::Unauthorized));
    }

    #[test]
    fn other_statuses_keep_their_code() {
        let err = AuthApiError::from_status(502);
        assert!(matches!(err, AuthApiError::Status(502)));
        assert_eq!(err.to_string(), "server menolak permintaan (502)");
    }
}
