#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod build;
pub mod client;
pub mod config;
pub mod messages;
pub mod notifier;
pub mod rooms;

pub use build::{BuildInfo, JobInfo, RepositoryInfo};
pub use client::{SparkClient, SparkError};
pub use config::{ConfigError, DeliveryConfig, SparkEndpoints, DEFAULT_BASE_URL};
pub use messages::{send_message, MessagePayload, TemplateError, TemplateRenderer};
pub use notifier::{DeliveryReport, Notifier, NotifierConfig, NotifierError, DEFAULT_TIMEOUT};
pub use rooms::{resolve_room, Room, RoomError, RoomKind, RoomList};
