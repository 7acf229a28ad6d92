//! Delivery outcome.

/// Outcome of a successful notifier run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    /// Room the messages were posted to.
    pub room_id: String,

    /// Number of messages posted (1 or 2).
    pub messages_sent: usize,
}
