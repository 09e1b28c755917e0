//! `pivoterp-session` — session lifecycle for the PivotERP client.
//!
//! **Responsibility:** single authority for "is there a logged-in user,
//! and who are they." Owns the persisted credential and the in-memory
//! session state; everything else in the client only reads the state it
//! publishes.

pub mod error;
pub mod manager;
pub mod store;

pub use error::SessionError;
pub use manager::{
    INVALID_CREDENTIALS_MESSAGE, SESSION_EXPIRED_MESSAGE, SessionManager, SessionState,
    SessionStatus,
};
pub use store::{CredentialStore, FileCredentialStore, MemoryCredentialStore, StoreError};
