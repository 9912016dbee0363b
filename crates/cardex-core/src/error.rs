//! Error types for the cardex-core library.
//!
//! Parsing card text never fails; these errors only cover the configuration
//! layer around the parser.

use thiserror::Error;

/// Main error type for the cardex library.
#[derive(Error, Debug)]
pub enum CardexError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the cardex library.
pub type Result<T> = std::result::Result<T, CardexError>;
