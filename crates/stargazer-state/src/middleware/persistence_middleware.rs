//! Persistence Middleware
//!
//! Mirrors session changes into durable storage.
//!
//! - Register/login success: stores user and token
//! - Logout: removes user and token
//! - Image load success: stores `{data, dateAdded}` with today's date
//!
//! Storage failures are logged; the transition itself still goes through.

use crate::actions::{Action, AuthAction, ImageAction};
use crate::middleware::Middleware;
use crate::persistence::{today, PersistenceBridge};
use crate::state::SessionState;

/// Middleware writing session changes to the Persistence Bridge
pub struct PersistenceMiddleware {
    bridge: PersistenceBridge,
}

impl PersistenceMiddleware {
    pub fn new(bridge: PersistenceBridge) -> Self {
        Self { bridge }
    }
}

impl Middleware for PersistenceMiddleware {
    fn handle(&mut self, action: &Action, _state: &SessionState) -> bool {
        let result = match action {
            Action::Auth(
                AuthAction::RegisterSuccess { user, token }
                | AuthAction::LoginSuccess { user, token },
            ) => {
                log::info!("PersistenceMiddleware: Saving session for {}", user.email);
                self.bridge.save_session(user, token)
            }
            Action::Auth(AuthAction::Logout) => {
                log::info!("PersistenceMiddleware: Removing stored session");
                self.bridge.clear_session()
            }
            Action::Image(ImageAction::LoadSuccess(record)) => {
                log::debug!("PersistenceMiddleware: Caching image details");
                self.bridge.save_image(record, today())
            }
            _ => Ok(()),
        };

        if let Err(e) = result {
            log::error!("Failed to persist {}: {:#}", action.name(), e);
        }

        true // Pass through
    }
}
