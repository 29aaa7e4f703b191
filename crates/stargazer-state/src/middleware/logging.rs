use crate::actions::Action;
use crate::middleware::Middleware;
use crate::state::SessionState;

/// LoggingMiddleware - logs all actions passing through
///
/// Only the transition name is logged; payloads may carry credentials.
#[derive(Debug, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, state: &SessionState) -> bool {
        log::debug!(
            "Action: {} (loading: {}, authenticated: {})",
            action.name(),
            state.is_loading,
            state.is_authenticated()
        );
        true
    }
}
