//! The session lifecycle state machine.
//!
//! One `SessionManager` instance per application, constructor-injected
//! with the API and credential store it depends on. Every transition is
//! published over a `tokio::sync::watch` channel; menu/UI layers
//! subscribe and recompute visibility, they never mutate session state.

use tokio::sync::{Mutex, watch};
use tokio_util::sync::CancellationToken;

use pivoterp_auth::UserProfile;
use pivoterp_client::{ApiError, AuthApi, Credentials};
use pivoterp_observability::redact;

use crate::error::SessionError;
use crate::store::CredentialStore;

/// Fallback shown when a login fails without a server-provided detail.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "invalid credentials";

/// Shown after a forced teardown caused by a mid-session 401.
pub const SESSION_EXPIRED_MESSAGE: &str = "session expired, please log in again";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Before `initialize` has been called.
    Uninitialized,
    /// Stored-credential verification is in flight.
    Initializing,
    Authenticated,
    Unauthenticated,
}

/// The published session state.
///
/// Invariant: `status == Authenticated` iff `user` is present, and only
/// after the backend confirmed the credential — a token merely sitting in
/// storage never counts as authenticated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub status: SessionStatus,
    pub user: Option<UserProfile>,
    /// Last operation's user-visible error, cleared on each new attempt.
    pub error: Option<String>,
}

impl SessionState {
    fn uninitialized() -> Self {
        Self { status: SessionStatus::Uninitialized, user: None, error: None }
    }

    fn unauthenticated(error: Option<String>) -> Self {
        Self { status: SessionStatus::Unauthenticated, user: None, error }
    }

    fn authenticated(user: UserProfile) -> Self {
        Self { status: SessionStatus::Authenticated, user: Some(user), error: None }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    /// Current role for permission checks; `None` while not authenticated.
    pub fn role(&self) -> Option<pivoterp_auth::Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// Single authority over authentication state.
pub struct SessionManager<A, S> {
    api: A,
    store: S,
    state_tx: watch::Sender<SessionState>,
    /// Single-flight guard: a second `login` while one is in flight is
    /// rejected instead of interleaving state writes.
    login_gate: Mutex<()>,
}

impl<A: AuthApi, S: CredentialStore> SessionManager<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            state_tx: watch::Sender::new(SessionState::uninitialized()),
            login_gate: Mutex::new(()),
        }
    }

    /// Subscribe to state transitions.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.state_tx.borrow().clone()
    }

    fn publish(&self, state: SessionState) {
        self.state_tx.send_replace(state);
    }

    /// Verify any persisted credential and settle into `Authenticated` or
    /// `Unauthenticated`.
    ///
    /// Called once when the owning UI scope mounts. If that scope is torn
    /// down mid-verification it cancels `cancel`; a cancelled
    /// initialization applies no transition and leaves storage untouched,
    /// so a stale result can never hit a fresh manager instance.
    pub async fn initialize(&self, cancel: &CancellationToken) -> Result<(), SessionError> {
        let snapshot = self.state();
        self.publish(SessionState {
            status: SessionStatus::Initializing,
            user: None,
            error: None,
        });

        let token = match self.store.load() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("credential store unreadable: {e}");
                self.publish(SessionState::unauthenticated(None));
                return Err(e.into());
            }
        };

        let Some(token) = token else {
            self.publish(SessionState::unauthenticated(None));
            return Ok(());
        };

        tracing::debug!(token = %redact(&token), "verifying stored credential");

        let verified = tokio::select! {
            _ = cancel.cancelled() => {
                // An explicit login may have raced us; only roll back if
                // our transient Initializing publication is still current.
                if self.state().status == SessionStatus::Initializing {
                    self.publish(snapshot);
                }
                tracing::debug!("initialization cancelled");
                return Ok(());
            }
            verified = self.api.verify_token(&token) => verified,
        };

        match verified {
            Ok(user) => {
                tracing::info!(username = %user.username, "session restored");
                self.publish(SessionState::authenticated(user));
            }
            Err(err) => {
                // Expected steady state for an expired token: purge it and
                // treat the user as logged out, no user-visible error.
                tracing::debug!("stored credential rejected: {err}");
                self.store.clear()?;
                self.publish(SessionState::unauthenticated(None));
            }
        }

        Ok(())
    }

    /// Authenticate with explicit credentials.
    ///
    /// Rejected credentials are not an `Err`: they surface through the
    /// published state's `error` field while `status` stays whatever it
    /// was. Only an overlapping login or a storage failure is an `Err`.
    pub async fn login(&self, credentials: Credentials) -> Result<(), SessionError> {
        let Ok(_guard) = self.login_gate.try_lock() else {
            return Err(SessionError::LoginInFlight);
        };

        // New attempt: clear the previous error, keep status and user.
        let mut before = self.state();
        before.error = None;
        self.publish(before.clone());

        match self.api.login(&credentials).await {
            Ok(resp) => {
                self.store.save(&resp.access_token)?;
                tracing::info!(username = %resp.user.username, "logged in");
                self.publish(SessionState::authenticated(resp.user));
                Ok(())
            }
            Err(err) => {
                let message = err
                    .detail()
                    .map(str::to_string)
                    .unwrap_or_else(|| INVALID_CREDENTIALS_MESSAGE.to_string());
                tracing::debug!(username = %credentials.username, "login failed: {err}");

                // Status unchanged, nothing persisted.
                before.error = Some(message);
                self.publish(before);
                Ok(())
            }
        }
    }

    /// End the session: delete the credential, publish `Unauthenticated`.
    pub fn logout(&self) -> Result<(), SessionError> {
        self.store.clear()?;
        tracing::info!("logged out");
        self.publish(SessionState::unauthenticated(None));
        Ok(())
    }

    /// Forced teardown after a mid-session 401: same as `logout` but with
    /// a distinct user-facing message. Never fails the caller — a 401
    /// handler has nowhere useful to propagate to.
    pub fn expire(&self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!("failed to clear credential on expiry: {e}");
        }
        self.publish(SessionState::unauthenticated(Some(
            SESSION_EXPIRED_MESSAGE.to_string(),
        )));
    }

    /// Re-fetch the profile for an authenticated session.
    ///
    /// This is where the global 401 policy applies: an `Unauthorized`
    /// answer on this authenticated path forces the session down.
    pub async fn refresh_profile(&self) -> Result<(), SessionError> {
        if !self.state().is_authenticated() {
            return Ok(());
        }
        let Some(token) = self.store.load()? else {
            return Ok(());
        };

        match self.api.profile(&token).await {
            Ok(user) => {
                let current = self.state();
                if current.is_authenticated() {
                    self.publish(SessionState::authenticated(user));
                }
            }
            Err(ApiError::Unauthorized) => self.expire(),
            Err(err) => {
                // Transient failure: keep the session, just log it.
                tracing::debug!("profile refresh failed: {err}");
            }
        }

        Ok(())
    }
}
