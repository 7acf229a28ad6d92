//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while building the delivery configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The API base URL could not be parsed.
    #[error("Invalid API base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The API base URL parsed, but cannot have endpoint paths appended.
    #[error("API base URL '{url}' cannot be used as a base for endpoints")]
    UnsupportedBaseUrl { url: String },

    /// The request timeout is zero, which fails every request.
    #[error("Request timeout must be greater than zero")]
    ZeroTimeout,
}
