//! # Gateway Error Types
//!
//! Typed error handling for the storefront gateway.
//! All provider-facing operations return `Result<T, GatewayError>`.

use thiserror::Error;

/// Core error type for all gateway operations.
///
/// The gateway does not branch on the provider's error taxonomy (auth,
/// invalid reference, rate limit, outage all land in `Provider`); the only
/// distinctions kept are the ones needed to pick a response status.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Provider API rejected the call
    #[error("Provider error [{provider}]: {message}")]
    Provider { provider: String, message: String },

    /// Network/HTTP error communicating with the provider
    #[error("Network error: {0}")]
    Network(String),

    /// Provider response could not be decoded
    #[error("Response decode error: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::Configuration(_) => 500,
            GatewayError::Provider { .. } => 502,
            GatewayError::Network(_) => 503,
            GatewayError::Decode(_) => 502,
        }
    }
}

/// Result type alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
