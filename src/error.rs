//! Error types for the fess-suggest library.
//!
//! All fallible operations return [`Result`], with [`SuggestError`] as the
//! error type. The engine seam maps its wire-level failures onto these
//! variants; in particular, a tokenize call naming an analyzer the engine has
//! no configuration for must surface as [`SuggestError::UnknownAnalyzer`],
//! which is the one condition callers recover from.

use std::io;

use thiserror::Error;

/// The main error type for fess-suggest operations.
#[derive(Error, Debug)]
pub enum SuggestError {
    /// Settings-layer errors (template resources, provisioning configuration).
    #[error("Settings error: {0}")]
    Settings(String),

    /// A tokenize-by-name call named an analyzer the engine has no
    /// configuration for. Recoverable: the reading-variant fallback and the
    /// analyzer validator both match on this variant.
    #[error("Unknown analyzer: {name}")]
    UnknownAnalyzer {
        /// The analyzer identifier the engine rejected.
        name: String,
    },

    /// Engine-side failures (connectivity, rejected requests, missing index).
    #[error("Engine error: {0}")]
    Engine(String),

    /// A bounded engine call exceeded its deadline.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// I/O errors (resource files, network transports).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SuggestError.
pub type Result<T> = std::result::Result<T, SuggestError>;

impl SuggestError {
    /// Create a new settings error.
    pub fn settings<S: Into<String>>(msg: S) -> Self {
        SuggestError::Settings(msg.into())
    }

    /// Create a new unknown-analyzer error.
    pub fn unknown_analyzer<S: Into<String>>(name: S) -> Self {
        SuggestError::UnknownAnalyzer { name: name.into() }
    }

    /// Create a new engine error.
    pub fn engine<S: Into<String>>(msg: S) -> Self {
        SuggestError::Engine(msg.into())
    }

    /// Create a new timeout error.
    pub fn timeout<S: Into<String>>(msg: S) -> Self {
        SuggestError::Timeout(msg.into())
    }
}
