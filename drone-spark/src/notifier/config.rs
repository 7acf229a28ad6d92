//! Notifier configuration.

use crate::config::{DeliveryConfig, DEFAULT_BASE_URL};
use std::time::Duration;

/// Default deadline for a single request to the messaging service.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for running the notifier.
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Credential, destination and supplementary message.
    delivery: DeliveryConfig,
    /// Base URL of the messaging API.
    base_url: String,
    /// Deadline for each request.
    timeout: Duration,
}

impl NotifierConfig {
    /// Creates a configuration targeting the public API with the default timeout.
    pub fn new(delivery: DeliveryConfig) -> Self {
        Self {
            delivery,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets a custom request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the delivery settings.
    pub fn delivery(&self) -> &DeliveryConfig {
        &self.delivery
    }

    /// Returns the API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
