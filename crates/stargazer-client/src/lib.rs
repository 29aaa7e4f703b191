//! Stargazer API client
//!
//! This crate provides a trait-based client for the stargazer backend:
//! account registration and login (password or Google access token) and
//! the NASA image-of-the-day endpoint.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │               ApiClient trait                   │
//! │  - register()                                   │
//! │  - login()                                      │
//! │  - fetch_nasa_image()                           │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌─────────────────┐         ┌─────────────────────────┐
//! │ HttpApiClient   │         │ UnauthorizedInterceptor │
//! │ (reqwest)       │◄────────│ (decorator, 401 hook)   │
//! └─────────────────┘         └─────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use stargazer_client::{ApiClient, AuthRequest, Credentials, HttpApiClient, UnauthorizedInterceptor};
//!
//! # async fn example() -> Result<(), stargazer_client::ApiError> {
//! let http = HttpApiClient::new("http://localhost:5000/api/v1")?;
//! let client = UnauthorizedInterceptor::new(http, || log::warn!("session expired"));
//!
//! let request = AuthRequest::Credentials(Credentials::login("a@x.com", "secret"));
//! let session = client.login(&request).await?;
//! println!("logged in as {}", session.user.name);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http_client;
pub mod interceptor;
pub mod types;

pub use client::ApiClient;
pub use error::{ApiError, GENERIC_ERROR_MESSAGE};
pub use http_client::HttpApiClient;
pub use interceptor::UnauthorizedInterceptor;
pub use types::{AuthRequest, AuthResponse, Credentials, ImageRecord, User};
