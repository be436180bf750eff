//! Error types for loading pipeline resources.
//!
//! Analysis itself never fails: only loading lexicons, configuration and
//! NER backends, or exporting reports, can produce an error.

use layered_review_lexicon::LexiconError;
use thiserror::Error;

use crate::extractor::BackendError;

/// Errors surfaced by `layered-reviews`.
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    /// The configuration file could not be read.
    #[error("failed to read config: {path}: {message}")]
    ConfigRead { path: String, message: String },

    /// The configuration document is malformed.
    #[error("invalid config: {message}")]
    Config { message: String },

    /// A report could not be serialized.
    #[error("failed to serialize report: {message}")]
    Serialize { message: String },
}

/// Result type for fallible `layered-reviews` operations.
pub type ReviewResult<T> = Result<T, ReviewError>;
