//! Dispatcher for deferred action dispatch
//!
//! Background work (the alert timer, the unauthorized-response hook) uses
//! the Dispatcher to feed actions back into the store. It holds only a weak
//! reference, so pending tasks never keep a dropped store alive.

use crate::actions::Action;
use crate::store::Store;
use std::sync::{Arc, Weak};

/// Cloneable handle for sending actions to the store from other tasks
#[derive(Clone)]
pub struct Dispatcher {
    store: Weak<Store>,
}

impl Dispatcher {
    pub fn new(store: &Arc<Store>) -> Self {
        Self {
            store: Arc::downgrade(store),
        }
    }

    /// Dispatch an action through the middleware chain and reducer
    ///
    /// The action is dropped (and logged) if the store no longer exists.
    pub fn dispatch(&self, action: Action) {
        match self.store.upgrade() {
            Some(store) => store.dispatch(action),
            None => log::debug!("Dispatcher: store dropped, discarding {}", action.name()),
        }
    }
}
