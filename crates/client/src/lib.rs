//! `pivoterp-client` — thin HTTP client for the PivotERP auth API.
//!
//! **Responsibility:** turn the backend's auth endpoints into typed calls
//! and classified errors. Raw transport errors never escape this crate;
//! the session layer reacts to the classification, not to reqwest.

pub mod api;
pub mod config;
pub mod dto;
pub mod error;

pub use api::{AuthApi, HttpAuthApi};
pub use config::{API_URL_ENV, ClientConfig, ConfigError};
pub use dto::{Credentials, LoginResponse};
pub use error::ApiError;
