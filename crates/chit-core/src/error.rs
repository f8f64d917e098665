//! Error types for Chit.
//!
//! This module provides a unified error type for all Chit operations,
//! with specific error variants for different failure modes.
//!
//! Malformed input to validation or normalization is never an error; those
//! operations always return a boolean or a string. Errors are reserved for
//! environment and configuration problems that make generation impossible.

use thiserror::Error;

/// A specialized `Result` type for Chit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Chit.
#[derive(Error, Debug)]
pub enum Error {
    /// Character outside the code alphabet passed to an index lookup
    #[error("invalid symbol '{0}': not in the code alphabet")]
    InvalidSymbol(char),

    /// The digest symbol stream ran out before enough valid parts were built
    #[error("symbol stream exhausted: needed {needed} symbols, digest provides {available}")]
    InsufficientEntropy {
        /// Symbols required up to this point of generation
        needed: usize,
        /// Symbols the digest provides in total
        available: usize,
    },

    /// The OS random source could not supply seed bytes
    #[error("random source unavailable: {0}")]
    RandomSourceUnavailable(String),

    /// A schema was constructed with an unusable value
    #[error("invalid schema value for '{field}': {reason}")]
    InvalidSchema {
        /// The offending schema field
        field: &'static str,
        /// Why the value is unusable
        reason: String,
    },

    /// A string could not be parsed as a code under the schema
    #[error("invalid code: '{0}'")]
    InvalidCodeFormat(String),
}

impl Error {
    /// Returns whether retrying the whole operation may succeed.
    ///
    /// An unseeded generation that failed on entropy exhaustion draws fresh
    /// random bytes on the next attempt; schema and symbol errors are
    /// permanent until the caller changes its input.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::InsufficientEntropy { .. } | Self::RandomSourceUnavailable(_)
        )
    }
}
