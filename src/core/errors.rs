use thiserror::Error;

/// Failure taxonomy for every public operation.
///
/// Nothing is retried or swallowed internally; a call either returns the
/// unwrapped payload or surfaces exactly one of these variants.
#[derive(Error, Debug)]
pub enum ExchangeError {
    /// The exchange answered with a non-zero envelope code.
    #[error("API error: {code} - {message}")]
    ApiError { code: i64, message: String },

    /// A signed endpoint was invoked without configured credentials.
    #[error("Authentication required: {0}")]
    AuthenticationRequired(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Transport failure, surfaced unchanged from the HTTP layer.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Response body absent or not decodable as the expected shape.
    #[error("Protocol error: {0}")]
    ProtocolError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::core::config::ConfigError),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Other error: {0}")]
    Other(String),
}
