/// Unified database error type
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Driver-level errors (URI parsing, handshake, server errors)
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// The server did not answer the verification round-trip
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] core_config::ConfigError),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
