//! Alert auto-clear timer
//!
//! Keeps at most one pending clear. Scheduling a new clear aborts the
//! previous one, so a fresh alert always stays up for the full delay.

use crate::actions::AlertAction;
use crate::dispatcher::Dispatcher;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;

pub struct AlertTimer {
    delay: Duration,
    runtime: Handle,
    pending: Mutex<Option<AbortHandle>>,
}

impl AlertTimer {
    /// Timer spawning its clear tasks on `runtime`
    pub fn new(delay: Duration, runtime: Handle) -> Self {
        Self {
            delay,
            runtime,
            pending: Mutex::new(None),
        }
    }

    /// Dispatch `clear-alert` after the delay, replacing any pending clear
    pub fn schedule_clear(&self, dispatcher: &Dispatcher) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
            log::debug!("AlertTimer: replaced pending alert clear");
        }

        let dispatcher = dispatcher.clone();
        let delay = self.delay;
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            dispatcher.dispatch(AlertAction::Clear.into());
        });
        *pending = Some(task.abort_handle());
    }

    /// Abort the pending clear, if any
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }
    }
}

impl Drop for AlertTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
