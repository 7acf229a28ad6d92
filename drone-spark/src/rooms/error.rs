//! Room resolution error types.

use crate::client::SparkError;
use thiserror::Error;

/// Errors that can occur while resolving the destination room.
#[derive(Debug, Error)]
pub enum RoomError {
    /// Neither a room id nor a room name was configured.
    #[error("Must specify roomId or roomName")]
    MissingDestination,

    /// No room visible to the token's user has the requested title.
    #[error("No room named '{name}' is visible to the token's user")]
    NoMatchingRoom { name: String },

    /// The room lookup call failed.
    #[error(transparent)]
    Spark(#[from] SparkError),
}
