//! Delivery settings.

use std::fmt;

/// Where to deliver notifications and how to authenticate.
///
/// Empty strings are treated the same as unset values, matching how Drone
/// passes plugin settings through the environment.
#[derive(Clone, PartialEq, Eq)]
pub struct DeliveryConfig {
    /// Bearer token of the posting user or bot.
    auth_token: String,
    /// Room to post into.
    room_id: Option<String>,
    /// Room title to look up when no room id is set.
    room_name: Option<String>,
    /// Free-form message sent after the build status message.
    message: Option<String>,
}

impl DeliveryConfig {
    /// Creates a configuration with only a credential set.
    pub fn new(auth_token: impl Into<String>) -> Self {
        Self {
            auth_token: auth_token.into(),
            room_id: None,
            room_name: None,
            message: None,
        }
    }

    /// Sets the destination room id.
    pub fn with_room_id(mut self, room_id: impl Into<String>) -> Self {
        self.room_id = Some(room_id.into());
        self
    }

    /// Sets the destination room title.
    pub fn with_room_name(mut self, room_name: impl Into<String>) -> Self {
        self.room_name = Some(room_name.into());
        self
    }

    /// Sets the supplementary message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns the bearer token.
    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    /// Returns the room id, if one was given and is non-empty.
    pub fn room_id(&self) -> Option<&str> {
        non_empty(self.room_id.as_deref())
    }

    /// Returns the room title, if one was given and is non-empty.
    pub fn room_name(&self) -> Option<&str> {
        non_empty(self.room_name.as_deref())
    }

    /// Returns the supplementary message, if one was given and is non-empty.
    pub fn message(&self) -> Option<&str> {
        non_empty(self.message.as_deref())
    }
}

impl fmt::Debug for DeliveryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeliveryConfig")
            .field("auth_token", &"<redacted>")
            .field("room_id", &self.room_id)
            .field("room_name", &self.room_name)
            .field("message", &self.message)
            .finish()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
