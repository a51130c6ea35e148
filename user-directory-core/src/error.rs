//! Unified error type definition

use thiserror::Error;

/// Message shown to the operator for every failed load.
///
/// HTTP failures and malformed payloads are deliberately collapsed into the
/// same text: distinguishing them offers no actionable recovery in a
/// read-only viewer. The operational log keeps the distinction.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch users.";

/// Core layer error type
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// The endpoint answered with a non-success status
    #[error("Endpoint returned HTTP {status}")]
    Http { status: u16 },

    /// Transport-level failure (DNS, connect, timeout, read)
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered 2xx but the body did not match the expected shape
    #[error("Malformed response: {0}")]
    Parse(String),
}

impl DirectoryError {
    /// The single user-visible message for this error.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }

    /// Whether it is expected behavior (endpoint down, flaky network) used
    /// for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Http { .. } | Self::Network(_) => true,
            Self::Parse(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type DirectoryResult<T> = std::result::Result<T, DirectoryError>;
