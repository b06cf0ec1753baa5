//! API utilities for talking to the auth backend
//!
//! The backend listens on [`API_PORT`] of the host that served the frontend.

pub const API_PORT: u16 = 3000;

fn base_url(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Base URL for API requests, e.g. "http://localhost:3000".
/// Empty when there is no window.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_url(&protocol, &hostname)
}

/// Full API URL for a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_uses_backend_port() {
        assert_eq!(base_url("https:", "rtq.example"), "https://rtq.example:3000");
    }
}
