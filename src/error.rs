//! Error types for hifz_drill.

use thiserror::Error;

/// Result type alias using [`DrillError`].
pub type Result<T> = std::result::Result<T, DrillError>;

/// Errors surfaced to the presentation layer.
///
/// Taps on positions that cannot be answered are not errors: the session
/// ignores them and returns `None`.
#[derive(Debug, Error)]
pub enum DrillError {
    #[error("surah {id} not found")]
    SurahNotFound { id: String },

    #[error("verse index {index} out of range for a surah of {len} verses")]
    VerseOutOfRange { index: usize, len: usize },

    #[error("invalid content in surah {surah}: {reason}")]
    InvalidContent { surah: String, reason: String },

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}
