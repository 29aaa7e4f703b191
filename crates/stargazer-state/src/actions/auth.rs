//! Auth actions
//!
//! Registration and login each have a begin/success/error triple.

use stargazer_client::User;
use std::fmt;

/// Actions for the authentication lifecycle
#[derive(Clone, PartialEq)]
pub enum AuthAction {
    /// Registration request sent
    RegisterBegin,
    /// Registration accepted, session established
    RegisterSuccess { user: User, token: String },
    /// Registration rejected or failed
    RegisterError { msg: String },

    /// Login request sent
    LoginBegin,
    /// Login accepted, session established
    LoginSuccess { user: User, token: String },
    /// Login rejected or failed
    LoginError { msg: String },

    /// Drop the session (explicit logout or unauthorized response)
    Logout,
}

impl AuthAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::RegisterBegin => "begin-register",
            Self::RegisterSuccess { .. } => "register-success",
            Self::RegisterError { .. } => "register-error",
            Self::LoginBegin => "begin-login",
            Self::LoginSuccess { .. } => "login-success",
            Self::LoginError { .. } => "login-error",
            Self::Logout => "logout",
        }
    }
}

// Manual impl keeps the token out of logs and panic messages
impl fmt::Debug for AuthAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegisterSuccess { user, .. } | Self::LoginSuccess { user, .. } => f
                .debug_struct(self.name())
                .field("user", user)
                .field("token", &"<redacted>")
                .finish(),
            Self::RegisterError { msg } | Self::LoginError { msg } => {
                f.debug_struct(self.name()).field("msg", msg).finish()
            }
            _ => f.write_str(self.name()),
        }
    }
}
