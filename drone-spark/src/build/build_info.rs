//! Build metadata.

use serde::Serialize;

/// The only status value rendered as a successful build.
const SUCCESS_STATUS: &str = "success";

/// A single CI build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    /// Tag name, for tag events.
    pub tag: String,

    /// Event that triggered the build (e.g., "push", "pull_request", "tag").
    pub event: String,

    /// Build number.
    pub number: u64,

    /// Commit SHA.
    pub commit: String,

    /// Git ref (e.g., "refs/heads/master").
    #[serde(rename = "ref")]
    pub git_ref: String,

    /// Branch name.
    pub branch: String,

    /// Commit author name.
    pub author: String,

    /// Commit author email.
    pub email: String,

    /// Build status as reported by the CI server (e.g., "success", "failure").
    pub status: String,

    /// URL of the build log.
    pub link: String,

    /// URL of the commit.
    pub commit_link: String,

    /// Commit message.
    pub message: String,

    /// URL of the CI server.
    pub drone_link: String,

    /// Unix timestamp when the build started.
    pub started: i64,

    /// Unix timestamp when the build was created.
    pub created: i64,
}

impl BuildInfo {
    /// Returns true if the build status is exactly `"success"`.
    ///
    /// Every other value, including differently cased variants, counts as a
    /// failed build.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }
}
