use crate::actions::Action;
use crate::middleware::Middleware;
use crate::reducer::reduce;
use crate::state::SessionState;
use std::sync::{Mutex, PoisonError};
use tokio::sync::watch;

/// Store - holds the session state and manages the Redux loop
///
/// The state lives in a `watch` channel: `dispatch` replaces it in place
/// and subscribers are notified whenever a snapshot actually changes.
/// Dispatch is synchronous, so a transition is visible to readers as soon
/// as `dispatch` returns.
pub struct Store {
    state_tx: watch::Sender<SessionState>,
    middleware: Mutex<Vec<Box<dyn Middleware>>>,
}

impl Store {
    pub fn new(initial_state: SessionState) -> Self {
        let (state_tx, _) = watch::channel(initial_state);
        Self {
            state_tx,
            middleware: Mutex::new(Vec::new()),
        }
    }

    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added.
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .push(middleware);
    }

    /// Get a snapshot of the current state
    pub fn state(&self) -> SessionState {
        self.state_tx.borrow().clone()
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    /// Process an action through middleware chain and reducer
    ///
    /// Middleware and reducer run under the state lock, one action at a time.
    /// `PersistenceMiddleware` writes storage synchronously inside that lock,
    /// so a file-backed dispatch blocks the calling runtime thread for the
    /// duration of a small file write.
    pub fn dispatch(&self, action: Action) {
        let mut middleware = self
            .middleware
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        self.state_tx.send_if_modified(|state| {
            // Pass through middleware chain
            for mw in middleware.iter_mut() {
                if !mw.handle(&action, state) {
                    log::debug!("Action {} consumed by middleware", action.name());
                    return false;
                }
            }

            let next = reduce(state.clone(), &action);
            if next == *state {
                return false;
            }
            *state = next;
            true
        });
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(SessionState::default())
    }
}
