//! Session State

use stargazer_client::{ImageRecord, User};
use std::fmt;

/// Kind of alert (determines how the UI styles the banner)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertType {
    /// Part of the banner contract shared with the UI. No session
    /// transition raises it: successes clear the alert instead.
    Success,
    Danger,
}

impl AlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }
}

/// The single in-memory snapshot of auth, loading, alert and image fields
///
/// Only the reducer produces new snapshots. `user` and `token` are always
/// both set or both unset.
#[derive(Clone, Default, PartialEq)]
pub struct SessionState {
    /// True between a begin transition and its success/error
    pub is_loading: bool,
    pub show_alert: bool,
    pub alert_text: String,
    pub alert_type: Option<AlertType>,
    pub user: Option<User>,
    pub token: Option<String>,
    /// Last successfully fetched image payload
    pub nasa_image_details: Option<ImageRecord>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    pub(crate) fn set_alert(&mut self, alert_type: AlertType, text: impl Into<String>) {
        self.show_alert = true;
        self.alert_type = Some(alert_type);
        self.alert_text = text.into();
    }

    pub(crate) fn clear_alert(&mut self) {
        self.show_alert = false;
        self.alert_type = None;
        self.alert_text.clear();
    }
}

impl fmt::Debug for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionState")
            .field("is_loading", &self.is_loading)
            .field("show_alert", &self.show_alert)
            .field("alert_text", &self.alert_text)
            .field("alert_type", &self.alert_type)
            .field("user", &self.user)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("nasa_image_details", &self.nasa_image_details)
            .finish()
    }
}
