//! Error types for the Vitae library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Vitae operations.
#[derive(Debug, Error)]
pub enum VitaeError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Language code not one of the supported values.
    #[error("Invalid language code: '{0}' (expected 'en' or 'es')")]
    InvalidLanguage(String),

    /// Language operations used outside an active provider scope.
    #[error("Language accessed outside a LanguageContext provider")]
    MissingLanguageProvider,

    /// Error reading or writing the preference store.
    #[error("Persistence error: {0}")]
    Persistence(String),
}

/// Result type alias for Vitae operations.
pub type Result<T> = std::result::Result<T, VitaeError>;
