//! Error types for tubeask.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TubeaskError {
    // Input validation errors
    #[error("Question is empty")]
    EmptyQuestion,

    #[error("No video id in page URL: {url}")]
    MissingVideoId { url: String },

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    // Backend errors
    #[error("Backend returned status {status}: {detail}")]
    Backend { status: u16, detail: String },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Malformed backend response: {message}")]
    MalformedResponse { message: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, TubeaskError>;
