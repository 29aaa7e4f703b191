use crate::actions::Action;
use crate::reducers::{alert_reducer, auth_reducer, image_reducer};
use crate::state::SessionState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that routes each action to its domain reducer
pub fn reduce(state: SessionState, action: &Action) -> SessionState {
    match action {
        Action::Auth(action) => auth_reducer::reduce_auth(state, action),
        Action::Image(action) => image_reducer::reduce_image(state, action),
        Action::Alert(action) => alert_reducer::reduce_alert(state, action),
    }
}
