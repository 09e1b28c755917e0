//! Wire DTOs for the auth endpoints (external contract with the backend).

use serde::{Deserialize, Serialize};

use pivoterp_auth::UserProfile;

/// Request body for `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

/// Success body of `POST /auth/login`.
///
/// Older backend builds send the token as `token`; current ones send
/// `access_token`. Both are accepted. A body missing either the token or
/// the user does not deserialize and is treated as rejected credentials
/// by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "token")]
    pub access_token: String,
    pub user: UserProfile,
}

/// Error body shape the backend uses for rejections.
///
/// `detail` is the canonical field; `message` shows up in a few older
/// handlers. Either counts as the human-readable server detail.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn into_detail(self) -> Option<String> {
        self.detail.or(self.message).filter(|d| !d.trim().is_empty())
    }
}
