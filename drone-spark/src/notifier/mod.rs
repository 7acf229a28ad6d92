//! Orchestrates room resolution and message delivery.

mod config;
mod error;
mod report;

pub use config::{NotifierConfig, DEFAULT_TIMEOUT};
pub use error::NotifierError;
pub use report::DeliveryReport;

use crate::build::{BuildInfo, RepositoryInfo};
use crate::client::SparkClient;
use crate::config::{ConfigError, SparkEndpoints};
use crate::messages::{send_message, TemplateRenderer};
use crate::rooms::resolve_room;
use tracing::{info, info_span, Instrument};

/// Posts build notifications to a room.
pub struct Notifier {
    config: NotifierConfig,
    client: SparkClient,
    renderer: TemplateRenderer,
}

impl Notifier {
    /// Builds a notifier from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`NotifierError::Config`] for an unusable base URL or a zero
    /// timeout, and [`NotifierError::Spark`] if the HTTP client cannot be
    /// created.
    pub fn new(config: NotifierConfig) -> Result<Self, NotifierError> {
        if config.timeout().is_zero() {
            return Err(ConfigError::ZeroTimeout.into());
        }

        let endpoints = SparkEndpoints::new(config.base_url())?;
        let client = SparkClient::new(
            config.delivery().auth_token(),
            endpoints,
            config.timeout(),
        )?;

        Ok(Self {
            config,
            client,
            renderer: TemplateRenderer::new(),
        })
    }

    /// Executes the full delivery flow for one build.
    ///
    /// 1. Resolves the destination room
    /// 2. Renders and posts the build status message
    /// 3. Posts the supplementary message, if one is configured
    ///
    /// Each step runs only if the previous one succeeded, so the
    /// supplementary message is never sent when the status message fails.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; nothing is retried.
    pub async fn run(
        &self,
        repo: &RepositoryInfo,
        build: &BuildInfo,
    ) -> Result<DeliveryReport, NotifierError> {
        let span = info_span!(
            "notify",
            repo = %repo.full_name,
            build = build.number,
            status = %build.status
        );

        self.deliver(repo, build).instrument(span).await
    }

    async fn deliver(
        &self,
        repo: &RepositoryInfo,
        build: &BuildInfo,
    ) -> Result<DeliveryReport, NotifierError> {
        let delivery = self.config.delivery();
        let room_id = resolve_room(&self.client, delivery).await?;

        let status_message = self.renderer.render_build_message(repo, build)?;
        send_message(&self.client, &room_id, &status_message).await?;
        let mut messages_sent = 1;

        if let Some(message) = delivery.message() {
            send_message(&self.client, &room_id, message).await?;
            messages_sent += 1;
        }

        info!(room_id = %room_id, messages_sent, "Notification delivered");
        Ok(DeliveryReport {
            room_id,
            messages_sent,
        })
    }
}
