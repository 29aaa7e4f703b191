//! Client-side session state for stargazer
//!
//! A Redux-style store holding the authenticated user, the transient alert
//! and the cached NASA image, plus the `AppContext` operations that drive
//! it through the API client.

pub mod actions;
pub mod alert_timer;
pub mod context;
pub mod dispatcher;
pub mod middleware;
pub mod persistence;
pub mod reducer;
pub mod reducers;
pub mod state;
pub mod store;

pub use actions::{Action, AlertAction, AuthAction, ImageAction};
pub use alert_timer::AlertTimer;
pub use context::AppContext;
pub use dispatcher::Dispatcher;
pub use persistence::{today, ImageDetailsRecord, PersistenceBridge};
pub use reducer::reduce;
pub use state::{AlertType, SessionState};
pub use store::Store;
