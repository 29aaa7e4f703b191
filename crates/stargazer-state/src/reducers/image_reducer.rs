//! Image Reducer

use crate::actions::ImageAction;
use crate::state::{AlertType, SessionState};

/// Reduce image loading actions
pub fn reduce_image(mut state: SessionState, action: &ImageAction) -> SessionState {
    match action {
        ImageAction::LoadBegin => {
            state.is_loading = true;
        }
        ImageAction::LoadSuccess(record) => {
            state.is_loading = false;
            state.nasa_image_details = Some(record.clone());
            state.clear_alert();
        }
        ImageAction::LoadError { msg } => {
            // Keep the previously cached image on failure
            state.is_loading = false;
            state.set_alert(AlertType::Danger, msg.clone());
        }
    }
    state
}
