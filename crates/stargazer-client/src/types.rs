//! Wire types
//!
//! These types mirror the JSON exchanged with the backend. Records returned
//! by the server keep any fields they do not model in a flattened map, so a
//! stored record reads back unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// An authenticated user as returned by the auth endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(rename = "lastName", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Any other fields the server sent
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Email/password credentials, with a display name when registering
#[derive(Clone, PartialEq, Serialize)]
pub struct Credentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Credentials for creating an account
    pub fn register(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Credentials for signing in
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: None,
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Request body for `/auth/register` and `/auth/login`
#[derive(Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AuthRequest {
    /// Email/password (and name, for registration)
    Credentials(Credentials),
    /// OAuth sign-in with a Google access token
    Google {
        #[serde(rename = "googleAccessToken")]
        google_access_token: String,
    },
}

impl AuthRequest {
    pub fn google(access_token: impl Into<String>) -> Self {
        Self::Google {
            google_access_token: access_token.into(),
        }
    }
}

impl fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credentials(credentials) => credentials.fmt(f),
            Self::Google { .. } => f
                .debug_struct("Google")
                .field("google_access_token", &"<redacted>")
                .finish(),
        }
    }
}

/// Successful auth response: the user and their bearer token
#[derive(Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

impl fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthResponse")
            .field("user", &self.user)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Image-of-the-day description as served by `/img/nasa-image`
///
/// The backend relays NASA's APOD payload; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdurl: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,

    /// Publication date as sent by the server (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
