//! Alert Reducer
//!
//! Handles the form-validation alerts and the timed clear.

use crate::actions::AlertAction;
use crate::state::{AlertType, SessionState};

pub const MISSING_VALUES_TEXT: &str = "Please provide all values!";
pub const FORGOT_PASSWORD_TEXT: &str = "Please provide a valid email address!";
pub const RESET_PASSWORD_TEXT: &str = "Passwords do not match!";

/// Reduce alert actions
pub fn reduce_alert(mut state: SessionState, action: &AlertAction) -> SessionState {
    match action {
        AlertAction::Display => state.set_alert(AlertType::Danger, MISSING_VALUES_TEXT),
        AlertAction::ForgotPasswordError => state.set_alert(AlertType::Danger, FORGOT_PASSWORD_TEXT),
        AlertAction::ResetPasswordError => state.set_alert(AlertType::Danger, RESET_PASSWORD_TEXT),
        AlertAction::Clear => state.clear_alert(),
    }
    state
}
