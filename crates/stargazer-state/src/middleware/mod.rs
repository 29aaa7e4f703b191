use crate::actions::Action;
use crate::state::SessionState;

pub mod logging;
pub mod persistence_middleware;

pub use logging::LoggingMiddleware;
pub use persistence_middleware::PersistenceMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs inside `Store::dispatch` while the state is locked, so it
/// must not dispatch actions itself. Side effects that need to feed back into
/// the store go through a `Dispatcher` from a spawned task instead.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current session state (before the action is applied)
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &SessionState) -> bool;
}
