//! Messaging API endpoints.

use super::ConfigError;
use url::Url;

/// Base URL of the public Webex Teams (Cisco Spark) API.
pub const DEFAULT_BASE_URL: &str = "https://api.ciscospark.com/v1/";

/// Path of the room listing endpoint, relative to the base URL.
const ROOMS_PATH: &str = "rooms";

/// Path of the message creation endpoint, relative to the base URL.
const MESSAGES_PATH: &str = "messages";

/// The REST endpoints the plugin talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparkEndpoints {
    rooms: Url,
    messages: Url,
}

impl SparkEndpoints {
    /// Derives the endpoints from an API base URL.
    ///
    /// A missing trailing slash is added, so `https://host/v1` and
    /// `https://host/v1/` both yield `https://host/v1/rooms`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the base URL is not an absolute URL that
    /// paths can be appended to.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let invalid = |source| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        };

        let base = Url::parse(&normalized).map_err(invalid)?;
        if base.cannot_be_a_base() {
            return Err(ConfigError::UnsupportedBaseUrl {
                url: base_url.to_string(),
            });
        }

        Ok(Self {
            rooms: base.join(ROOMS_PATH).map_err(invalid)?,
            messages: base.join(MESSAGES_PATH).map_err(invalid)?,
        })
    }

    /// Returns the room listing endpoint.
    pub fn rooms(&self) -> &Url {
        &self.rooms
    }

    /// Returns the message creation endpoint.
    pub fn messages(&self) -> &Url {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_endpoints_from_default_base() {
        let endpoints = SparkEndpoints::new(DEFAULT_BASE_URL).unwrap();

        assert_eq!(
            endpoints.rooms().as_str(),
            "https://api.ciscospark.com/v1/rooms"
        );
        assert_eq!(
            endpoints.messages().as_str(),
            "https://api.ciscospark.com/v1/messages"
        );
    }

    #[test]
    fn adds_missing_trailing_slash() {
        let endpoints = SparkEndpoints::new("http://127.0.0.1:1234/v1").unwrap();

        assert_eq!(endpoints.rooms().as_str(), "http://127.0.0.1:1234/v1/rooms");
        assert_eq!(
            endpoints.messages().as_str(),
            "http://127.0.0.1:1234/v1/messages"
        );
    }

    #[test]
    fn rejects_relative_base() {
        let result = SparkEndpoints::new("api/v1");
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn rejects_non_hierarchical_base() {
        let result = SparkEndpoints::new("mailto:ops@example.com");
        assert!(matches!(result, Err(ConfigError::UnsupportedBaseUrl { .. })));
    }
}
