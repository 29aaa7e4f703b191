//! Actions module
//!
//! Every state change is expressed as an action (a named transition).
//! Actions are tagged by domain:
//! - `Auth`: registration, login and logout
//! - `Image`: loading the NASA image of the day
//! - `Alert`: showing and clearing the transient notification

pub mod alert;
pub mod auth;
pub mod image;

pub use alert::AlertAction;
pub use auth::AuthAction;
pub use image::ImageAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Authentication actions
    Auth(AuthAction),
    /// Image loading actions
    Image(ImageAction),
    /// Alert actions
    Alert(AlertAction),
}

impl Action {
    /// Stable transition name, safe to log (carries no payload)
    pub fn name(&self) -> &'static str {
        match self {
            Action::Auth(action) => action.name(),
            Action::Image(action) => action.name(),
            Action::Alert(action) => action.name(),
        }
    }
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Action::Auth(action)
    }
}

impl From<ImageAction> for Action {
    fn from(action: ImageAction) -> Self {
        Action::Image(action)
    }
}

impl From<AlertAction> for Action {
    fn from(action: AlertAction) -> Self {
        Action::Alert(action)
    }
}
