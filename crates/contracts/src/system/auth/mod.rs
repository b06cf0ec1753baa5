use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Current user as reported by the auth service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub is_admin: bool,
}

impl UserInfo {
    /// Name for the sidebar footer: full name when known, else the login.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }

    /// Up to two uppercase initials for the avatar fallback.
    pub fn initials(&self) -> String {
        self.display_name()
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(full_name: Option<&str>) -> UserInfo {
        UserInfo {
            id: "u1".into(),
            username: "admin".into(),
            full_name: full_name.map(str::to_string),
            email: None,
            avatar_url: None,
            is_admin: true,
        }
    }

    #[test]
    fn display_name_falls_back_to_username() {
        assert_eq!(user(None).display_name(), "admin");
        assert_eq!(user(Some("  ")).display_name(), "admin");
        assert_eq!(user(Some("Ahmad Fauzi")).display_name(), "Ahmad Fauzi");
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(user(Some("ahmad fauzi rahman")).initials(), "AF");
        assert_eq!(user(None).initials(), "A");
    }

    #[test]
    fn avatar_is_optional_on_the_wire() {
        let json = r#"{"id":"1","username":"op","full_name":null,"email":null,"is_admin":false}"#;
        let info: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.avatar_url, None);
    }
}
