//! Application context
//!
//! `AppContext` is what the surrounding application talks to: it owns the
//! store, the single configured API client and the alert timer, and exposes
//! the session operations (register, login, Google sign-in, logout, image
//! fetch and the form alerts).
//!
//! # Action protocol
//!
//! Every network action follows the same steps:
//! 1. dispatch the `begin` transition
//! 2. issue one request
//! 3. dispatch `success` with the payload or `error` with the alert text
//! 4. schedule the alert clear, whatever the outcome
//!
//! Failures never propagate to the caller; they end up as an alert.
//! Storage writes happen in `PersistenceMiddleware` on the success and
//! logout transitions. A 401 on a session-authenticated request (the image
//! fetch) logs the session out before the action sees the error; a 401 from
//! login or register only rejects the credentials.

use crate::actions::{Action, AlertAction, AuthAction, ImageAction};
use crate::alert_timer::AlertTimer;
use crate::dispatcher::Dispatcher;
use crate::middleware::{LoggingMiddleware, PersistenceMiddleware};
use crate::persistence::{today, PersistenceBridge};
use crate::state::SessionState;
use crate::store::Store;
use anyhow::{Context, Result};
use stargazer_client::{
    ApiClient, ApiError, AuthRequest, AuthResponse, Credentials, UnauthorizedInterceptor,
};
use stargazer_config::{AppConfig, Storage};
use std::fmt;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::watch;

/// Which auth endpoint an operation goes through
#[derive(Debug, Clone, Copy)]
enum AuthFlow {
    Register,
    Login,
}

impl AuthFlow {
    fn begin(self) -> AuthAction {
        match self {
            Self::Register => AuthAction::RegisterBegin,
            Self::Login => AuthAction::LoginBegin,
        }
    }

    fn success(self, AuthResponse { user, token }: AuthResponse) -> AuthAction {
        match self {
            Self::Register => AuthAction::RegisterSuccess { user, token },
            Self::Login => AuthAction::LoginSuccess { user, token },
        }
    }

    fn error(self, msg: String) -> AuthAction {
        match self {
            Self::Register => AuthAction::RegisterError { msg },
            Self::Login => AuthAction::LoginError { msg },
        }
    }
}

impl fmt::Display for AuthFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Register => f.write_str("register"),
            Self::Login => f.write_str("login"),
        }
    }
}

/// The session state container and its operations
pub struct AppContext {
    store: Arc<Store>,
    dispatcher: Dispatcher,
    client: Arc<dyn ApiClient>,
    persistence: PersistenceBridge,
    alert_timer: AlertTimer,
}

impl AppContext {
    /// Build a context around `client`, seeding state from `storage`
    ///
    /// Must be called from within a tokio runtime; alert timers are
    /// spawned on it.
    pub fn new<C: ApiClient + 'static>(
        client: C,
        storage: Arc<dyn Storage>,
        config: &AppConfig,
    ) -> Result<Self> {
        let runtime =
            Handle::try_current().context("AppContext must be created inside a tokio runtime")?;

        let persistence = PersistenceBridge::new(storage);
        let mut store = Store::new(persistence.seed_state());

        // Add middleware in order (they execute in this order)
        store.add_middleware(Box::new(LoggingMiddleware::new()));
        store.add_middleware(Box::new(PersistenceMiddleware::new(persistence.clone())));

        let store = Arc::new(store);
        let dispatcher = Dispatcher::new(&store);

        let logout = dispatcher.clone();
        let client = UnauthorizedInterceptor::new(client, move || {
            logout.dispatch(AuthAction::Logout.into());
        });

        Ok(Self {
            store,
            dispatcher,
            client: Arc::new(client),
            persistence,
            alert_timer: AlertTimer::new(config.alert_timeout(), runtime),
        })
    }

    /// Snapshot of the current session state
    pub fn state(&self) -> SessionState {
        self.store.state()
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.store.subscribe()
    }

    fn dispatch(&self, action: impl Into<Action>) {
        self.store.dispatch(action.into());
    }

    fn schedule_alert_clear(&self) {
        self.alert_timer.schedule_clear(&self.dispatcher);
    }

    fn raise_alert(&self, action: AlertAction) {
        self.dispatch(action);
        self.schedule_alert_clear();
    }

    /// Show the "missing values" alert
    pub fn display_alert(&self) {
        self.raise_alert(AlertAction::Display);
    }

    /// Show the forgot-password validation alert
    pub fn password_alert(&self) {
        self.raise_alert(AlertAction::ForgotPasswordError);
    }

    /// Show the reset-password validation alert
    pub fn reset_alert(&self) {
        self.raise_alert(AlertAction::ResetPasswordError);
    }

    async fn authenticate(&self, flow: AuthFlow, request: AuthRequest) {
        self.dispatch(flow.begin());

        let result = match flow {
            AuthFlow::Register => self.client.register(&request).await,
            AuthFlow::Login => self.client.login(&request).await,
        };

        match result {
            Ok(response) => {
                log::info!("{} succeeded for {}", flow, response.user.email);
                self.dispatch(flow.success(response));
            }
            Err(e) => {
                log::warn!("{} failed: {}", flow, e);
                self.dispatch(flow.error(e.user_message()));
            }
        }

        self.schedule_alert_clear();
    }

    /// Create an account with name, email and password
    pub async fn register_user(&self, credentials: Credentials) {
        self.authenticate(AuthFlow::Register, AuthRequest::Credentials(credentials))
            .await;
    }

    /// Create an account from a Google access token
    pub async fn signup_google(&self, access_token: &str) {
        self.authenticate(AuthFlow::Register, AuthRequest::google(access_token))
            .await;
    }

    /// Sign in with email and password
    pub async fn login_user(&self, credentials: Credentials) {
        self.authenticate(AuthFlow::Login, AuthRequest::Credentials(credentials))
            .await;
    }

    /// Sign in with a Google access token
    pub async fn signin_google(&self, access_token: &str) {
        self.authenticate(AuthFlow::Login, AuthRequest::google(access_token))
            .await;
    }

    /// Drop the session locally; the server is not contacted
    pub fn logout_user(&self) {
        self.dispatch(AuthAction::Logout);
    }

    /// Fetch the NASA image of the day and cache it
    pub async fn fetch_nasa_image(&self) {
        self.dispatch(ImageAction::LoadBegin);

        let token = self.store.state().token;
        match self.client.fetch_nasa_image(token.as_deref()).await {
            Ok(record) => self.dispatch(ImageAction::LoadSuccess(record)),
            Err(e) => {
                log::warn!("image load failed: {}", e);
                self.dispatch(image_error(&e));
            }
        }

        self.schedule_alert_clear();
    }

    /// Fetch the image only when the cached one was not added today
    ///
    /// Returns whether a fetch was made.
    pub async fn fetch_nasa_image_if_stale(&self) -> bool {
        let cached_today = self
            .persistence
            .load_image_details()
            .is_some_and(|record| record.date_added == today());

        if cached_today && self.store.state().nasa_image_details.is_some() {
            log::debug!("Cached image is from today, skipping fetch");
            return false;
        }

        self.fetch_nasa_image().await;
        true
    }
}

fn image_error(e: &ApiError) -> ImageAction {
    ImageAction::LoadError {
        msg: e.user_message(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::alert_reducer::MISSING_VALUES_TEXT;
    use crate::state::AlertType;
    use async_trait::async_trait;
    use chrono::Days;
    use pretty_assertions::assert_eq;
    use stargazer_client::{ImageRecord, User, GENERIC_ERROR_MESSAGE};
    use stargazer_config::{MemoryStorage, StorageKey};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Client returning canned results and recording what it was sent
    #[derive(Clone)]
    struct MockClient {
        auth: Result<AuthResponse, ApiError>,
        image: Result<ImageRecord, ApiError>,
        image_calls: Arc<AtomicUsize>,
        last_bearer: Arc<Mutex<Option<String>>>,
    }

    impl MockClient {
        fn new() -> Self {
            Self {
                auth: Ok(AuthResponse {
                    user: user(),
                    token: "t1".to_string(),
                }),
                image: Ok(image("Orion")),
                image_calls: Arc::new(AtomicUsize::new(0)),
                last_bearer: Arc::new(Mutex::new(None)),
            }
        }

        fn auth_error(mut self, status: u16, msg: Option<&str>) -> Self {
            self.auth = Err(ApiError::Status {
                status,
                msg: msg.map(str::to_string),
            });
            self
        }

        fn image_error(mut self, status: u16) -> Self {
            self.image = Err(ApiError::Status { status, msg: None });
            self
        }
    }

    #[async_trait]
    impl ApiClient for MockClient {
        async fn register(&self, _request: &AuthRequest) -> Result<AuthResponse, ApiError> {
            self.auth.clone()
        }

        async fn login(&self, _request: &AuthRequest) -> Result<AuthResponse, ApiError> {
            self.auth.clone()
        }

        async fn fetch_nasa_image(&self, bearer: Option<&str>) -> Result<ImageRecord, ApiError> {
            self.image_calls.fetch_add(1, Ordering::SeqCst);
            *self.last_bearer.lock().unwrap() = bearer.map(str::to_string);
            self.image.clone()
        }
    }

    fn user() -> User {
        User {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            ..User::default()
        }
    }

    fn image(title: &str) -> ImageRecord {
        ImageRecord {
            title: Some(title.to_string()),
            ..ImageRecord::default()
        }
    }

    fn context(client: MockClient, storage: &Arc<MemoryStorage>) -> AppContext {
        AppContext::new(client, storage.clone(), &AppConfig::default()).unwrap()
    }

    fn logged_in(storage: &Arc<MemoryStorage>) {
        PersistenceBridge::new(storage.clone())
            .save_session(&user(), "t0")
            .unwrap();
    }

    #[test]
    fn test_new_requires_runtime() {
        let storage = Arc::new(MemoryStorage::new());
        let result = AppContext::new(MockClient::new(), storage, &AppConfig::default());
        assert!(result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_register_establishes_and_persists_session() {
        let storage = Arc::new(MemoryStorage::new());
        let ctx = context(MockClient::new(), &storage);

        ctx.register_user(Credentials::register("A", "a@x.com", "pw"))
            .await;

        let state = ctx.state();
        assert_eq!(state.user, Some(user()));
        assert_eq!(state.token.as_deref(), Some("t1"));
        assert!(!state.is_loading);
        assert!(state.alert_text.is_empty());
        assert_eq!(storage.get(StorageKey::Token).as_deref(), Some("t1"));
        assert!(storage.get(StorageKey::User).is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_google_signin_establishes_session() {
        let storage = Arc::new(MemoryStorage::new());
        let ctx = context(MockClient::new(), &storage);

        ctx.signin_google("google-token").await;

        assert!(ctx.state().is_authenticated());
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_rejected_shows_server_message() {
        let storage = Arc::new(MemoryStorage::new());
        let ctx = context(
            MockClient::new().auth_error(401, Some("invalid credentials")),
            &storage,
        );

        ctx.login_user(Credentials::login("a@x.com", "wrong")).await;

        let state = ctx.state();
        assert!(!state.is_loading);
        assert!(state.show_alert);
        assert_eq!(state.alert_type, Some(AlertType::Danger));
        assert_eq!(state.alert_text, "invalid credentials");
        assert!(state.user.is_none());
        assert!(state.token.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_bad_login_keeps_prior_session() {
        let storage = Arc::new(MemoryStorage::new());
        logged_in(&storage);
        let ctx = context(
            MockClient::new().auth_error(401, Some("invalid credentials")),
            &storage,
        );
        let before = ctx.state();
        assert!(before.is_authenticated());

        ctx.login_user(Credentials::login("a@x.com", "wrong")).await;

        let state = ctx.state();
        assert_eq!(state.alert_text, "invalid credentials");
        assert_eq!(state.user, before.user);
        assert_eq!(state.token.as_deref(), Some("t0"));
        assert_eq!(storage.get(StorageKey::Token).as_deref(), Some("t0"));
        assert!(storage.get(StorageKey::User).is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_401_error_keeps_existing_session() {
        let storage = Arc::new(MemoryStorage::new());
        logged_in(&storage);
        let ctx = context(
            MockClient::new().auth_error(400, Some("email already in use")),
            &storage,
        );

        ctx.signup_google("google-token").await;

        let state = ctx.state();
        assert_eq!(state.alert_text, "email already in use");
        assert_eq!(state.token.as_deref(), Some("t0"));
        assert_eq!(storage.get(StorageKey::Token).as_deref(), Some("t0"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_without_message_uses_generic_text() {
        let storage = Arc::new(MemoryStorage::new());
        let ctx = context(MockClient::new().auth_error(500, None), &storage);

        ctx.register_user(Credentials::register("A", "a@x.com", "pw"))
            .await;

        assert_eq!(ctx.state().alert_text, GENERIC_ERROR_MESSAGE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_image_success_caches_with_todays_date() {
        let storage = Arc::new(MemoryStorage::new());
        logged_in(&storage);
        let client = MockClient::new();
        let bearer = client.last_bearer.clone();
        let ctx = context(client, &storage);

        ctx.fetch_nasa_image().await;

        assert_eq!(ctx.state().nasa_image_details, Some(image("Orion")));
        assert_eq!(bearer.lock().unwrap().as_deref(), Some("t0"));

        let stored = PersistenceBridge::new(storage).load_image_details().unwrap();
        assert_eq!(stored.data, image("Orion"));
        assert_eq!(stored.date_added, today());
    }

    #[tokio::test(start_paused = true)]
    async fn test_image_401_logs_out() {
        let storage = Arc::new(MemoryStorage::new());
        logged_in(&storage);
        let ctx = context(MockClient::new().image_error(401), &storage);
        assert!(ctx.state().is_authenticated());

        ctx.fetch_nasa_image().await;

        let state = ctx.state();
        assert!(state.user.is_none());
        assert!(state.token.is_none());
        assert!(state.show_alert);
        assert_eq!(state.alert_text, GENERIC_ERROR_MESSAGE);
        assert!(storage.get(StorageKey::User).is_none());
        assert!(storage.get(StorageKey::Token).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_image_error_keeps_previous_image() {
        let storage = Arc::new(MemoryStorage::new());
        PersistenceBridge::new(storage.clone())
            .save_image(&image("Vega"), today())
            .unwrap();
        let ctx = context(MockClient::new().image_error(503), &storage);

        ctx.fetch_nasa_image().await;

        assert_eq!(ctx.state().nasa_image_details, Some(image("Vega")));
        assert!(ctx.state().show_alert);
    }

    #[tokio::test(start_paused = true)]
    async fn test_alert_clears_after_timeout() {
        let storage = Arc::new(MemoryStorage::new());
        let ctx = context(MockClient::new(), &storage);

        ctx.display_alert();
        assert_eq!(ctx.state().alert_text, MISSING_VALUES_TEXT);

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert!(ctx.state().show_alert);

        tokio::time::sleep(Duration::from_millis(2)).await;
        let state = ctx.state();
        assert!(!state.show_alert);
        assert!(state.alert_text.is_empty());
        assert_eq!(state.alert_type, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_request_alert_clears_after_timeout() {
        let storage = Arc::new(MemoryStorage::new());
        let ctx = context(MockClient::new().auth_error(400, Some("nope")), &storage);

        ctx.login_user(Credentials::login("a@x.com", "pw")).await;
        assert!(ctx.state().show_alert);

        tokio::time::sleep(Duration::from_millis(3001)).await;
        assert!(!ctx.state().show_alert);
    }

    #[tokio::test(start_paused = true)]
    async fn test_logout_clears_session_only() {
        let storage = Arc::new(MemoryStorage::new());
        logged_in(&storage);
        let ctx = context(MockClient::new(), &storage);
        ctx.fetch_nasa_image().await;

        ctx.logout_user();

        let state = ctx.state();
        assert!(!state.is_authenticated());
        assert_eq!(state.nasa_image_details, Some(image("Orion")));
        assert!(storage.get(StorageKey::Token).is_none());
        assert!(storage.get(StorageKey::ImageDetails).is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_if_stale() {
        let storage = Arc::new(MemoryStorage::new());
        let bridge = PersistenceBridge::new(storage.clone());
        let yesterday = today().checked_sub_days(Days::new(1)).unwrap();
        bridge.save_image(&image("Vega"), yesterday).unwrap();

        let client = MockClient::new();
        let calls = client.image_calls.clone();
        let ctx = context(client, &storage);

        // Cached image is from yesterday
        assert!(ctx.fetch_nasa_image_if_stale().await);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // Now it is from today
        assert!(!ctx.fetch_nasa_image_if_stale().await);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(ctx.state().nasa_image_details, Some(image("Orion")));
    }
}
