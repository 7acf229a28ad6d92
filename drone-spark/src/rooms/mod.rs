//! Destination room resolution.
//!
//! A room is either configured directly by id, or looked up by its title
//! among the rooms the token's user can see.

mod error;
mod room;

pub use error::RoomError;
pub use room::{Room, RoomKind, RoomList};

use crate::client::SparkClient;
use crate::config::DeliveryConfig;
use tracing::{debug, info, info_span, warn, Instrument};

/// Resolves the room to deliver to.
///
/// A configured room id is returned as-is without any network call. Otherwise
/// the configured room name is looked up with a single room listing request.
///
/// # Errors
///
/// * [`RoomError::MissingDestination`] if neither id nor name is set; no
///   request is made.
/// * [`RoomError::NoMatchingRoom`] if no listed room has exactly that title.
/// * [`RoomError::Spark`] if the listing request fails or returns a body that
///   is not a room list.
pub async fn resolve_room(
    client: &SparkClient,
    config: &DeliveryConfig,
) -> Result<String, RoomError> {
    if let Some(room_id) = config.room_id() {
        debug!(room_id = %room_id, "Using configured room id");
        return Ok(room_id.to_string());
    }

    let Some(room_name) = config.room_name() else {
        return Err(RoomError::MissingDestination);
    };

    let span = info_span!("resolve_room", room_name = %room_name);

    lookup_room(client, room_name).instrument(span).await
}

/// Lists the visible rooms and picks the one titled `room_name`.
async fn lookup_room(client: &SparkClient, room_name: &str) -> Result<String, RoomError> {
    info!("Looking up room by title");

    let rooms = client.list_rooms().await?;
    debug!(count = rooms.items.len(), "Listed rooms");

    match find_room(&rooms.items, room_name) {
        Some(room) => {
            debug!(kind = ?room.kind, "Matched room");
            info!(room_id = %room.id, "Resolved room");
            Ok(room.id.clone())
        }
        None => Err(RoomError::NoMatchingRoom {
            name: room_name.to_string(),
        }),
    }
}

/// Finds the first room whose title is exactly `title`.
///
/// Titles are compared case-sensitively. Rooms with an empty id never match.
fn find_room<'a>(rooms: &'a [Room], title: &str) -> Option<&'a Room> {
    let mut matches = rooms
        .iter()
        .filter(|room| room.title == title && !room.id.is_empty());

    let first = matches.next()?;
    let others = matches.count();
    if others > 0 {
        warn!(
            title = %title,
            matches = others + 1,
            room_id = %first.id,
            "Several rooms share this title, using the first one listed"
        );
    }

    Some(first)
}
