//! Notifier error types.

use crate::client::SparkError;
use crate::config::ConfigError;
use crate::messages::TemplateError;
use crate::rooms::RoomError;

/// Errors that can occur while running the notifier.
#[derive(Debug, thiserror::Error)]
pub enum NotifierError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Destination room could not be resolved.
    #[error(transparent)]
    Room(#[from] RoomError),

    /// Messaging service call failed.
    #[error(transparent)]
    Spark(#[from] SparkError),

    /// Status message could not be rendered.
    #[error(transparent)]
    Template(#[from] TemplateError),
}
