//! Error types for Gathika.

use thiserror::Error;

/// Library-level error type for Gathika operations.
#[derive(Error, Debug)]
pub enum GathikaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid upload: {0}")]
    Validation(String),

    #[error("Transcription failed: {0}")]
    Transcription(String),

    #[error("Analysis failed: {0}")]
    Analysis(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Groq API error: {0}")]
    Groq(String),
}

/// Result type alias for Gathika operations.
pub type Result<T> = std::result::Result<T, GathikaError>;
