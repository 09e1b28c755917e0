//! The auth API surface and its reqwest-backed implementation.

use async_trait::async_trait;
use reqwest::{Response, StatusCode};

use pivoterp_auth::UserProfile;
use pivoterp_observability::redact;

use crate::config::ClientConfig;
use crate::dto::{Credentials, ErrorBody, LoginResponse};
use crate::error::ApiError;

/// The auth endpoints the session layer depends on.
///
/// A trait seam so the session state machine can be exercised against a
/// scripted implementation in tests.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /auth/login` — unauthenticated.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// `GET /auth/verify-token` — proves a stored credential is still valid.
    async fn verify_token(&self, token: &str) -> Result<UserProfile, ApiError>;

    /// `GET /auth/profile` — profile for an already-verified session.
    async fn profile(&self, token: &str) -> Result<UserProfile, ApiError>;
}

/// Production implementation over HTTP.
pub struct HttpAuthApi {
    http: reqwest::Client,
    base: String,
}

impl HttpAuthApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self { http: reqwest::Client::new(), base: config.api_base() }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn bearer_get(&self, path: &str, token: &str) -> Result<UserProfile, ApiError> {
        let resp = self
            .http
            .get(self.endpoint(path))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED {
            // 401 off the login path: the session is no longer valid.
            tracing::debug!(path, token = %redact(token), "bearer request unauthorized");
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            return Err(rejected(resp).await);
        }

        resp.json::<UserProfile>()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))
    }
}

/// Fold a non-2xx response into `Rejected`, extracting the server detail
/// when the body carries one.
async fn rejected(resp: Response) -> ApiError {
    let status = resp.status().as_u16();
    let detail = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(ErrorBody::into_detail);

    ApiError::Rejected { status, detail }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        tracing::debug!(username = %credentials.username, "logging in");

        let resp = self
            .http
            .post(self.endpoint("/auth/login"))
            .json(credentials)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        // On the login path a 401 is bad credentials, not an expired
        // session, so it classifies as Rejected like any other failure.
        if !resp.status().is_success() {
            return Err(rejected(resp).await);
        }

        resp.json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))
    }

    async fn verify_token(&self, token: &str) -> Result<UserProfile, ApiError> {
        self.bearer_get("/auth/verify-token", token).await
    }

    async fn profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        self.bearer_get("/auth/profile", token).await
    }
}
