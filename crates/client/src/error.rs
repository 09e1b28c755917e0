use thiserror::Error;

/// Classified outcome of an auth API call.
///
/// Every transport failure is folded into one of these variants; callers
/// never see a raw reqwest error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure (DNS, refused connection, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// 401 on an authenticated (non-login) path. The session layer must
    /// react with forced teardown.
    #[error("unauthorized")]
    Unauthorized,

    /// The server rejected the request (including 401 on the login path,
    /// which means bad credentials rather than an expired session).
    #[error("request rejected ({status})")]
    Rejected {
        status: u16,
        /// Human-readable server detail, when one was provided.
        detail: Option<String>,
    },

    /// A 2xx response whose body did not match the contract. Treated by
    /// callers the same as a rejection.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    /// The server-provided detail message, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}
