//! Messaging API error types.

use thiserror::Error;

/// Errors that can occur while talking to the messaging service.
#[derive(Debug, Error)]
pub enum SparkError {
    /// Building or executing the HTTP request failed.
    #[error("Request to messaging service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Messaging service rejected request to '{url}' with status {status}: {body}")]
    ServiceRejected {
        url: String,
        status: u16,
        body: String,
    },

    /// The response body did not have the expected shape.
    #[error("Failed to query rooms from '{url}'. Bad JSON response ('{body}'): {source}")]
    MalformedResponse {
        url: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },
}
