//! Result and error types for Comprar.

use thiserror::Error;

/// Result type for Comprar operations
pub type ComprarResult<T> = Result<T, ComprarError>;

/// Errors that can occur while driving the purchase funnel
#[derive(Debug, Error)]
pub enum ComprarError {
    /// Browser launch error
    #[error("Failed to launch browser: {message}")]
    BrowserLaunch {
        /// Error message
        message: String,
    },

    /// Page error
    #[error("Page error: {message}")]
    Page {
        /// Error message
        message: String,
    },

    /// Navigation error
    #[error("Navigation to {url} failed: {message}")]
    Navigation {
        /// URL that failed
        url: String,
        /// Error message
        message: String,
    },

    /// JavaScript probe evaluation error
    #[error("Evaluation failed: {message}")]
    Eval {
        /// Error message
        message: String,
    },

    /// Operation timed out
    #[error("Timed out after {ms}ms waiting for {waited_for}")]
    Timeout {
        /// Timeout in milliseconds
        ms: u64,
        /// Description of what was waited for
        waited_for: String,
    },

    /// Assertion failed
    #[error("Assertion failed: {message}")]
    AssertionFailed {
        /// Error message
        message: String,
    },

    /// Invalid regex pattern in an attribute assertion
    #[error("Invalid pattern {pattern:?}: {message}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Error message
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },
}

impl ComprarError {
    /// Whether this error is the scenario-level failure kind (an expected UI
    /// state that did not materialize within the wait budget).
    #[must_use]
    pub const fn is_assertion(&self) -> bool {
        matches!(
            self,
            Self::AssertionFailed { .. } | Self::Timeout { .. }
        )
    }
}
