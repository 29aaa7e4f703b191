//! Alert actions
//!
//! Form-validation alerts raised by the UI and the timed clear.

/// Actions for the transient alert banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertAction {
    /// A form was submitted with missing values
    Display,
    /// Hide the alert and reset its text and type
    Clear,
    /// The forgot-password form was submitted without a usable email
    ForgotPasswordError,
    /// The reset-password form was submitted with mismatching passwords
    ResetPasswordError,
}

impl AlertAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Display => "display-alert",
            Self::Clear => "clear-alert",
            Self::ForgotPasswordError => "forgot-password-error",
            Self::ResetPasswordError => "reset-password-error",
        }
    }
}
