#![allow(clippy::multiple_crate_versions)]
//! Error types for the chronassert temporal assertion library
//!
//! Every failing assertion call produces exactly one [`AssertionError`].
//! The variants separate the two audiences a failure can have:
//!
//! - **Assertion failures** ([`AssertionError::NullActual`], [`AssertionError::Failure`])
//!   are what a test is expected to report: the value under test did not satisfy the relation.
//! - **Usage errors** ([`AssertionError::IllegalArgument`], [`AssertionError::Parse`])
//!   mean the assertion itself was called wrongly and should be fixed in the test code.
//!
//! # Examples
//!
//! ```
//! use chronassert_error::{AssertionError, Result};
//!
//! fn check_expected(expected: Option<&str>) -> Result<&str> {
//!     expected.ok_or_else(|| AssertionError::null_text_argument("OffsetDateTime"))
//! }
//!
//! let err = check_expected(None).unwrap_err();
//! assert!(err.is_usage_error());
//! ```

/// Message used whenever the value under test is absent.
pub const ACTUAL_IS_NULL: &str = "\nExpecting actual not to be null";

/// Root error type for all chronassert operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssertionError {
    /// The wrapped actual value is absent
    ///
    /// Always checked first: no expected value is resolved and no
    /// comparison runs once this is detected.
    #[error("\nExpecting actual not to be null")]
    NullActual,

    /// The assertion was called with an invalid argument
    ///
    /// Raised for a missing expected value (typed or textual) and for
    /// inverted range bounds. This signals a bug in the calling test,
    /// not a failed comparison.
    #[error("{message}")]
    IllegalArgument {
        /// Description of the offending argument
        message: String,
    },

    /// Expected text could not be resolved into a temporal value
    #[error("Text '{text}' could not be parsed as {representation}: {reason}")]
    Parse {
        /// The text that failed to parse
        text: String,
        /// Display name of the target representation
        representation: &'static str,
        /// Underlying parser diagnostic
        reason: String,
    },

    /// The comparison predicate evaluated to false
    #[error("{message}")]
    Failure {
        /// Fully rendered failure message
        message: String,
    },
}

impl AssertionError {
    /// Create the error raised when the typed expected value is missing
    pub fn null_argument(representation: &str) -> Self {
        Self::IllegalArgument {
            message: format!("The {representation} to compare actual with should not be null"),
        }
    }

    /// Create the error raised when the textual expected value is missing
    pub fn null_text_argument(representation: &str) -> Self {
        Self::IllegalArgument {
            message: format!(
                "The String representing the {representation} to compare actual with should not be null"
            ),
        }
    }

    /// Create an illegal argument error with the given message
    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self::IllegalArgument {
            message: message.into(),
        }
    }

    /// Create a parse error for `text` targeting `representation`
    pub fn parse(text: impl Into<String>, representation: &'static str, reason: impl ToString) -> Self {
        Self::Parse {
            text: text.into(),
            representation,
            reason: reason.to_string(),
        }
    }

    /// Create an assertion failure carrying a rendered message
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    /// Check if this error reports a value that did not satisfy the assertion
    #[must_use]
    pub const fn is_assertion_failure(&self) -> bool {
        matches!(self, Self::NullActual | Self::Failure { .. })
    }

    /// Check if this error reports a misuse of the assertion API
    #[must_use]
    pub const fn is_usage_error(&self) -> bool {
        matches!(self, Self::IllegalArgument { .. } | Self::Parse { .. })
    }
}

/// Specialized Result type for chronassert operations
///
/// # Examples
///
/// ```
/// use chronassert_error::Result;
///
/// fn validate() -> Result<u8> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, AssertionError>;
