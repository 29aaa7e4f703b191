//! Unauthorized-response hook (decorator pattern)
//!
//! Wraps any `ApiClient` and runs a callback whenever a session-authenticated
//! call fails with status 401, before the error is handed back to the
//! caller. The session layer uses this to force a logout when the stored
//! token is rejected.
//!
//! Login and register pass straight through: a 401 there means the
//! credentials were wrong, not that the current session expired.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{AuthRequest, AuthResponse, ImageRecord};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// API client decorator reacting to 401 responses
///
/// # Example
///
/// ```rust,ignore
/// let client = UnauthorizedInterceptor::new(HttpApiClient::new(base_url)?, move || {
///     dispatcher.dispatch(Action::Auth(AuthAction::Logout));
/// });
/// ```
#[derive(Clone)]
pub struct UnauthorizedInterceptor<C: ApiClient> {
    inner: C,
    on_unauthorized: UnauthorizedHook,
}

impl<C: ApiClient> UnauthorizedInterceptor<C> {
    /// Wrap `inner`, running `on_unauthorized` on every session 401
    pub fn new(inner: C, on_unauthorized: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            inner,
            on_unauthorized: Arc::new(on_unauthorized),
        }
    }

    fn intercept<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if let Err(err) = &result {
            if err.is_unauthorized() {
                log::warn!("Unauthorized response, running logout hook");
                (self.on_unauthorized)();
            }
        }
        result
    }
}

impl<C: ApiClient + fmt::Debug> fmt::Debug for UnauthorizedInterceptor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnauthorizedInterceptor")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<C: ApiClient> ApiClient for UnauthorizedInterceptor<C> {
    async fn register(&self, request: &AuthRequest) -> Result<AuthResponse, ApiError> {
        self.inner.register(request).await
    }

    async fn login(&self, request: &AuthRequest) -> Result<AuthResponse, ApiError> {
        self.inner.login(request).await
    }

    async fn fetch_nasa_image(&self, bearer: Option<&str>) -> Result<ImageRecord, ApiError> {
        let result = self.inner.fetch_nasa_image(bearer).await;
        self.intercept(result)
    }
}
