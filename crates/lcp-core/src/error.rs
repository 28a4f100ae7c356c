//! # Error Types
//!
//! Errors raised by policy construction and date arithmetic. Pack loading
//! has its own error type in `lcp-pack`.

use thiserror::Error;

/// Error in core policy or temporal operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A timestamp string could not be interpreted as a calendar date.
    #[error("invalid timestamp {value:?}: {reason}")]
    InvalidTimestamp {
        /// The offending input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A validation policy value is out of range.
    #[error("invalid validation policy: {0}")]
    InvalidPolicy(String),
}
