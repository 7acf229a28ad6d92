//! Room records returned by the room listing endpoint.

use serde::Deserialize;

/// Kind of a room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomKind {
    /// One-to-one conversation.
    Direct,

    /// Group conversation.
    Group,

    /// Any kind this plugin does not know about.
    #[default]
    #[serde(other)]
    Other,
}

/// A room visible to the token's user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Room {
    /// Stable room identifier.
    pub id: String,

    /// Display title.
    pub title: String,

    /// Room kind.
    #[serde(rename = "type", default)]
    pub kind: RoomKind,
}

/// Body of the room listing response.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomList {
    /// Rooms in listing order.
    pub items: Vec<Room>,
}
