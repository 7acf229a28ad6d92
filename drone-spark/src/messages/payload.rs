//! Message creation request body.

use serde::Serialize;

/// JSON body of a message creation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePayload<'a> {
    /// Destination room.
    pub room_id: &'a str,

    /// Message text, interpreted as markdown.
    pub markdown: &'a str,
}
