//! Shared error surface across limitio crates.

use std::io;

use thiserror::Error;

/// Raised by a strict wrapper once its byte limit is reached.
///
/// Travels inside [`io::Error`] so the wrappers can implement the standard
/// `Read`/`Write` traits. Use [`is_threshold_exceeded`] to recognise it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("threshold exceeded")]
pub struct ThresholdExceeded;

impl From<ThresholdExceeded> for io::Error {
    fn from(e: ThresholdExceeded) -> Self {
        io::Error::other(e)
    }
}

/// True when `err` carries [`ThresholdExceeded`], whichever wrapper raised it.
pub fn is_threshold_exceeded(err: &io::Error) -> bool {
    err.get_ref()
        .is_some_and(|inner| inner.is::<ThresholdExceeded>())
}

/// Stable error codes (exit codes and log fields).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// A strict limit was hit.
    ThresholdExceeded,
    /// Invalid configuration.
    BadConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Error from a wrapped stream.
    Io,
}

impl ErrorCode {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ThresholdExceeded => "THRESHOLD_EXCEEDED",
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Io => "IO",
        }
    }

    /// Process exit code for the pipe binary.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorCode::Io => 1,
            ErrorCode::BadConfig | ErrorCode::UnsupportedVersion => 2,
            ErrorCode::ThresholdExceeded => 3,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, LimitioError>;

/// Unified error type used by core and pipe.
#[derive(Debug, Error)]
pub enum LimitioError {
    #[error("threshold exceeded")]
    ThresholdExceeded,
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("io: {0}")]
    Io(io::Error),
}

impl LimitioError {
    /// Map to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            LimitioError::ThresholdExceeded => ErrorCode::ThresholdExceeded,
            LimitioError::BadConfig(_) => ErrorCode::BadConfig,
            LimitioError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            LimitioError::Io(_) => ErrorCode::Io,
        }
    }
}

impl From<ThresholdExceeded> for LimitioError {
    fn from(_: ThresholdExceeded) -> Self {
        LimitioError::ThresholdExceeded
    }
}

impl From<io::Error> for LimitioError {
    fn from(e: io::Error) -> Self {
        if is_threshold_exceeded(&e) {
            LimitioError::ThresholdExceeded
        } else {
            LimitioError::Io(e)
        }
    }
}
