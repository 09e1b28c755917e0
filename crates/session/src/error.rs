use thiserror::Error;

use crate::store::StoreError;

/// Failures the session manager surfaces to its caller.
///
/// Note the asymmetry with login *rejections*: bad credentials are not an
/// `Err` — they land in the published state's `error` field, because the
/// UI observes session state, not call results.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A `login` call was made while another one was still in flight.
    #[error("a login request is already in flight")]
    LoginInFlight,

    #[error(transparent)]
    Storage(#[from] StoreError),
}
