use thiserror::Error;

/// Result type for inboxlens operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types shared across the inboxlens crates
#[derive(Debug, Error)]
pub enum Error {
    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Payload was not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// User-supplied argument did not match anything in the record
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
