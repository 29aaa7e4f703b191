//! reqwest-based API client
//!
//! Direct implementation of the `ApiClient` trait. It makes real HTTP calls
//! and maps non-success responses to `ApiError::Status`, pulling the
//! `msg` field out of the error body when there is one.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{AuthRequest, AuthResponse, ImageRecord};
use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

const REGISTER_PATH: &str = "auth/register";
const LOGIN_PATH: &str = "auth/login";
const NASA_IMAGE_PATH: &str = "img/nasa-image";

/// Error body shape used by the backend: `{ "msg": "..." }`
#[derive(Deserialize)]
struct ErrorBody {
    msg: Option<String>,
}

/// Direct API client using reqwest
///
/// This is the base implementation that makes actual HTTP calls.
/// It can be wrapped by `UnauthorizedInterceptor` to react to 401 responses.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpApiClient {
    /// Create a client for the given versioned API base, e.g. `http://host/api/v1`
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, None)
    }

    /// Create a client with an optional per-request timeout.
    /// Without one, the transport defaults apply.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn post_auth(&self, path: &str, request: &AuthRequest) -> Result<AuthResponse, ApiError> {
        debug!("POST {}", path);
        let response = self
            .http
            .post(self.url(path))
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        decode(response).await
    }
}

/// Turn a response into the expected payload or an `ApiError`
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !(200..300).contains(&status) {
        let msg = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.msg);
        if msg.is_none() {
            debug!("Error response {} carried no message", status);
        }
        return Err(ApiError::Status { status, msg });
    }

    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn register(&self, request: &AuthRequest) -> Result<AuthResponse, ApiError> {
        self.post_auth(REGISTER_PATH, request).await
    }

    async fn login(&self, request: &AuthRequest) -> Result<AuthResponse, ApiError> {
        self.post_auth(LOGIN_PATH, request).await
    }

    async fn fetch_nasa_image(&self, bearer: Option<&str>) -> Result<ImageRecord, ApiError> {
        debug!("GET {}", NASA_IMAGE_PATH);
        let mut request = self.http.get(self.url(NASA_IMAGE_PATH));
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        decode(response).await
    }
}
