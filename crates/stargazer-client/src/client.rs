//! API client trait
//!
//! This module defines the core `ApiClient` trait that all client
//! implementations must satisfy.

use crate::error::ApiError;
use crate::types::{AuthRequest, AuthResponse, ImageRecord};
use async_trait::async_trait;

/// Stargazer API client trait
///
/// Defines the interface for talking to the backend.
/// Implementations can be direct (hitting the API) or decorated
/// with cross-cutting behavior such as the unauthorized-response hook.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use stargazer_client::{ApiClient, ImageRecord};
///
/// async fn todays_title(client: &dyn ApiClient) -> Option<String> {
///     client.fetch_nasa_image(None).await.ok()?.title
/// }
/// ```
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Create an account (`POST /auth/register`)
    ///
    /// The request carries either name/email/password credentials
    /// or a Google access token.
    async fn register(&self, request: &AuthRequest) -> Result<AuthResponse, ApiError>;

    /// Sign in (`POST /auth/login`)
    async fn login(&self, request: &AuthRequest) -> Result<AuthResponse, ApiError>;

    /// Fetch the current NASA image description (`GET /img/nasa-image`)
    ///
    /// # Arguments
    ///
    /// * `bearer` - Session token to send as `Authorization: Bearer`, if any
    async fn fetch_nasa_image(&self, bearer: Option<&str>) -> Result<ImageRecord, ApiError>;
}
