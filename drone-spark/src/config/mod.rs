//! Delivery configuration.
//!
//! This module holds the settings that decide where and how messages are
//! delivered: the credential, the destination room and the API endpoints.

mod delivery;
mod endpoints;
mod error;

pub use delivery::DeliveryConfig;
pub use endpoints::{SparkEndpoints, DEFAULT_BASE_URL};
pub use error::ConfigError;
