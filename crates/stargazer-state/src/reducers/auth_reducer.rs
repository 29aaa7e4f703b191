//! Auth Reducer
//!
//! Handles registration, login and logout. Success establishes user and
//! token together and clears any alert; errors surface the message as a
//! danger alert and leave the session untouched.

use crate::actions::AuthAction;
use crate::state::{AlertType, SessionState};

/// Reduce auth actions
pub fn reduce_auth(mut state: SessionState, action: &AuthAction) -> SessionState {
    match action {
        AuthAction::RegisterBegin | AuthAction::LoginBegin => {
            state.is_loading = true;
        }

        AuthAction::RegisterSuccess { user, token } | AuthAction::LoginSuccess { user, token } => {
            state.is_loading = false;
            state.user = Some(user.clone());
            state.token = Some(token.clone());
            state.clear_alert();
        }

        AuthAction::RegisterError { msg } | AuthAction::LoginError { msg } => {
            state.is_loading = false;
            state.set_alert(AlertType::Danger, msg.clone());
        }

        AuthAction::Logout => {
            state.user = None;
            state.token = None;
        }
    }
    state
}
