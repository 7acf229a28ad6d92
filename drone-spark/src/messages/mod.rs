//! Build status messages.
//!
//! This module renders the markdown status message for a build and posts
//! messages to a room.

mod error;
mod payload;
mod renderer;

pub use error::TemplateError;
pub use payload::MessagePayload;
pub use renderer::{create_handlebars_registry, TemplateRenderer};

use crate::client::{SparkClient, SparkError};
use tracing::info;

/// Posts a markdown message to a room.
///
/// Exactly one request is made; failures are not retried.
///
/// # Errors
///
/// Returns [`SparkError`] if the request cannot be completed or the service
/// rejects it.
pub async fn send_message(
    client: &SparkClient,
    room_id: &str,
    markdown: &str,
) -> Result<(), SparkError> {
    let payload = MessagePayload { room_id, markdown };
    client.create_message(&payload).await?;

    info!(room_id = %room_id, bytes = markdown.len(), "Message sent");
    Ok(())
}
