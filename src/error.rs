//! The error type for the asynchronous acquisition path.

use failure::{Error, Fail};

/// The error returned when one or both asynchronous sources fail.
///
/// This type is produced only by [`join`] and [`pair_async`]; the
/// synchronous derivations never construct errors of their own. The
/// failure of the underlying computation is preserved as the cause, so
/// scheduler-specific error types do not leak through the public API.
///
/// [`join`]: ./fn.join.html
/// [`pair_async`]: ./fn.pair_async.html
#[derive(Debug, Fail)]
#[fail(display = "failed to resolve one or both sources: {}", cause)]
pub struct JoinError {
    cause: Error,
}

impl JoinError {
    pub(crate) fn new(cause: impl Into<Error>) -> JoinError {
        JoinError {
            cause: cause.into(),
        }
    }

    /// Returns a reference to the underlying cause.
    pub fn cause(&self) -> &Error {
        &self.cause
    }

    /// Consume itself and return the underlying cause.
    pub fn into_cause(self) -> Error {
        self.cause
    }
}
