//! # Error Types

/// Errors from sylchipper operations.
#[derive(Debug, thiserror::Error)]
pub enum SylError {
    /// The requested language is not in the supported set.
    #[error("language not supported: {0}")]
    UnsupportedLanguage(String),

    /// The requested limit mode is not one of the known modes.
    #[error("unsupported limit type: {0}")]
    UnsupportedLimitMode(String),

    /// The limit threshold cannot be used with its mode.
    #[error("invalid {mode} limit: {limit}")]
    InvalidLimit {
        /// The limit mode name.
        mode: String,

        /// The rejected threshold.
        limit: f64,
    },

    /// A syllable filter is configured, but no vocabulary has been fit or loaded.
    #[error("syllable filter requires a fitted vocabulary")]
    UnfittedVocab,

    /// Token id does not name any entry of the current vocabulary.
    #[error("token id {id} out of range for vocabulary of size {size}")]
    TokenOutOfRange {
        /// The offending id.
        id: u64,

        /// The vocabulary size at lookup time.
        size: usize,
    },

    /// A rank exceeds the capacity of the target id type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The rank that exceeded the capacity.
        size: usize,
    },

    /// The store holds no vocabulary for the language.
    #[error("no stored vocabulary for language: {0}")]
    VocabNotFound(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error (base64, integer, utf-8, etc.)
    #[error("parse error: {0}")]
    Parse(String),

    /// Error from an external component.
    #[error("{0}")]
    External(String),
}

/// Result type for sylchipper operations.
pub type SylResult<T> = core::result::Result<T, SylError>;
