//! Authenticated REST client for the Webex Teams (Cisco Spark) API.
//!
//! Wraps a [`reqwest::Client`] configured with a request deadline and
//! exposes the two calls the plugin needs: listing rooms and creating a
//! message. Every request carries the bearer token and a JSON content type.

mod error;

pub use error::SparkError;

use crate::config::SparkEndpoints;
use crate::messages::MessagePayload;
use crate::rooms::RoomList;
use reqwest::header::CONTENT_TYPE;
use reqwest::{RequestBuilder, Response};
use std::fmt;
use std::time::Duration;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for the messaging service.
#[derive(Clone)]
pub struct SparkClient {
    http: reqwest::Client,
    endpoints: SparkEndpoints,
    auth_token: String,
}

impl SparkClient {
    /// Builds a client for the given endpoints.
    ///
    /// # Arguments
    ///
    /// * `auth_token` - Bearer token sent with every request
    /// * `endpoints` - Room and message endpoints
    /// * `timeout` - Deadline applied to each request, from connect to body
    ///
    /// # Errors
    ///
    /// Returns [`SparkError::Transport`] if the HTTP client cannot be built.
    pub fn new(
        auth_token: impl Into<String>,
        endpoints: SparkEndpoints,
        timeout: Duration,
    ) -> Result<Self, SparkError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            endpoints,
            auth_token: auth_token.into(),
        })
    }

    /// Returns the endpoints this client talks to.
    pub fn endpoints(&self) -> &SparkEndpoints {
        &self.endpoints
    }

    /// Lists the rooms visible to the token's user.
    ///
    /// Only the first page returned by the service is read.
    ///
    /// # Errors
    ///
    /// Returns [`SparkError::Transport`] on connection failures and timeouts,
    /// [`SparkError::ServiceRejected`] on a non-success status, and
    /// [`SparkError::MalformedResponse`] if the body is not a room list.
    pub async fn list_rooms(&self) -> Result<RoomList, SparkError> {
        let url = self.endpoints.rooms();
        debug!(url = %url, "Listing rooms");

        let response = self.authorized(self.http.get(url.clone())).send().await?;
        let body = read_success_body(url, response).await?;

        serde_json::from_str(&body).map_err(|source| SparkError::MalformedResponse {
            url: url.to_string(),
            body,
            source,
        })
    }

    /// Posts a message to a room.
    ///
    /// The response body is not inspected beyond the status code.
    ///
    /// # Errors
    ///
    /// Returns [`SparkError::Transport`] on connection failures and timeouts,
    /// and [`SparkError::ServiceRejected`] on a non-success status.
    pub async fn create_message(&self, payload: &MessagePayload<'_>) -> Result<(), SparkError> {
        let url = self.endpoints.messages();
        debug!(url = %url, room_id = %payload.room_id, "Posting message");

        let response = self
            .authorized(self.http.post(url.clone()))
            .json(payload)
            .send()
            .await?;
        read_success_body(url, response).await?;

        Ok(())
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.auth_token)
            .header(CONTENT_TYPE, "application/json")
    }
}

impl fmt::Debug for SparkClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SparkClient")
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}

/// Reads the full response body, failing on a non-success status.
async fn read_success_body(url: &Url, response: Response) -> Result<String, SparkError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(SparkError::ServiceRejected {
            url: url.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}
