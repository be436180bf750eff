//! Error types for lexicon loading.

use thiserror::Error;

/// Errors that can occur while loading lexicons.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The lexicon file could not be read.
    #[error("failed to read lexicon: {path}: {message}")]
    Read { path: String, message: String },

    /// The lexicon document is not valid TOML or has the wrong shape.
    #[error("failed to parse lexicon: {message}")]
    Parse { message: String },
}

/// Result type for lexicon operations.
pub type LexiconResult<T> = Result<T, LexiconError>;
