//! Command-line arguments.
//!
//! Every setting can be given as a flag or through the environment variable
//! Drone sets for plugins.

use clap::Parser;
use drone_spark::{
    BuildInfo, DeliveryConfig, JobInfo, NotifierConfig, RepositoryInfo, DEFAULT_BASE_URL,
};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

const ENV_FILE_FLAG: &str = "--env-file";

/// Drone Spark - Post Drone build status notifications to a Webex Teams room.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Args {
    /// Extra message sent after the build status message.
    #[arg(long, env = "PLUGIN_MESSAGE")]
    message: Option<String>,

    /// Bearer token of the posting user or bot.
    #[arg(long, env = "PLUGIN_AUTH_TOKEN", hide_env_values = true)]
    auth_token: String,

    /// Room to post into.
    #[arg(long, env = "PLUGIN_ROOMID")]
    room_id: Option<String>,

    /// Room title to look up when no room id is given.
    #[arg(long, env = "PLUGIN_ROOMNAME")]
    room_name: Option<String>,

    /// Messaging API base URL.
    #[arg(long, env = "PLUGIN_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds.
    #[arg(
        long,
        env = "PLUGIN_TIMEOUT",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_secs: u64,

    /// Drone server URL.
    #[arg(long, env = "DRONE_SERVER", default_value = "")]
    system_link: String,

    /// Repository owner.
    #[arg(long, env = "DRONE_REPO_OWNER", default_value = "")]
    repo_owner: String,

    /// Repository name.
    #[arg(long, env = "DRONE_REPO_NAME", default_value = "")]
    repo_name: String,

    /// Repository full name.
    #[arg(long, env = "DRONE_REPO", default_value = "")]
    repo_full_name: String,

    /// Git commit sha.
    #[arg(long, env = "DRONE_COMMIT_SHA", default_value = "")]
    commit_sha: String,

    /// Git commit ref.
    #[arg(long, env = "DRONE_COMMIT_REF", default_value = "refs/heads/master")]
    commit_ref: String,

    /// Git commit branch.
    #[arg(long, env = "DRONE_COMMIT_BRANCH", default_value = "master")]
    commit_branch: String,

    /// Git author name.
    #[arg(long, env = "DRONE_COMMIT_AUTHOR", default_value = "")]
    commit_author: String,

    /// Git author email.
    #[arg(long, env = "DRONE_COMMIT_AUTHOR_EMAIL", default_value = "")]
    commit_author_email: String,

    /// Git commit link.
    #[arg(long, env = "DRONE_COMMIT_LINK", default_value = "")]
    commit_link: String,

    /// Git commit message.
    #[arg(long, env = "DRONE_COMMIT_MESSAGE", default_value = "")]
    commit_message: String,

    /// Build event.
    #[arg(long, env = "DRONE_BUILD_EVENT", default_value = "push")]
    build_event: String,

    /// Build number.
    #[arg(long, env = "DRONE_BUILD_NUMBER", default_value_t = 0)]
    build_number: u64,

    /// Build status.
    #[arg(long, env = "DRONE_BUILD_STATUS", default_value = "success")]
    build_status: String,

    /// Build link.
    #[arg(long, env = "DRONE_BUILD_LINK", default_value = "")]
    build_link: String,

    /// Build started (unix timestamp).
    #[arg(long, env = "DRONE_BUILD_STARTED", default_value_t = 0)]
    build_started: i64,

    /// Build created (unix timestamp).
    #[arg(long, env = "DRONE_BUILD_CREATED", default_value_t = 0)]
    build_created: i64,

    /// Build tag.
    #[arg(long, env = "DRONE_TAG", default_value = "")]
    build_tag: String,

    /// Job started (unix timestamp).
    #[arg(long, env = "DRONE_JOB_STARTED", default_value_t = 0)]
    job_started: i64,

    /// Source env file.
    #[arg(long)]
    env_file: Option<PathBuf>,
}

impl Args {
    /// Returns the env file given on the command line, if any.
    pub(crate) fn env_file(&self) -> Option<&Path> {
        self.env_file.as_deref()
    }

    /// Returns the repository identity.
    pub(crate) fn repository(&self) -> RepositoryInfo {
        RepositoryInfo {
            owner: self.repo_owner.clone(),
            name: self.repo_name.clone(),
            full_name: self.repo_full_name.clone(),
        }
    }

    /// Returns the build metadata.
    pub(crate) fn build(&self) -> BuildInfo {
        BuildInfo {
            tag: self.build_tag.clone(),
            event: self.build_event.clone(),
            number: self.build_number,
            commit: self.commit_sha.clone(),
            git_ref: self.commit_ref.clone(),
            branch: self.commit_branch.clone(),
            author: self.commit_author.clone(),
            email: self.commit_author_email.clone(),
            status: self.build_status.clone(),
            link: self.build_link.clone(),
            commit_link: self.commit_link.clone(),
            message: self.commit_message.clone(),
            drone_link: self.system_link.clone(),
            started: self.build_started,
            created: self.build_created,
        }
    }

    /// Returns the job metadata.
    pub(crate) fn job(&self) -> JobInfo {
        JobInfo {
            started: self.job_started,
        }
    }

    /// Returns the notifier configuration.
    pub(crate) fn notifier_config(&self) -> NotifierConfig {
        let mut delivery = DeliveryConfig::new(self.auth_token.clone());
        if let Some(room_id) = &self.room_id {
            delivery = delivery.with_room_id(room_id.clone());
        }
        if let Some(room_name) = &self.room_name {
            delivery = delivery.with_room_name(room_name.clone());
        }
        if let Some(message) = &self.message {
            delivery = delivery.with_message(message.clone());
        }

        NotifierConfig::new(delivery)
            .with_base_url(self.base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

/// Finds the `--env-file` value in raw arguments.
///
/// Accepts both `--env-file <path>` and `--env-file=<path>`; the last
/// occurrence wins. Arguments after `--` are not inspected.
pub(crate) fn env_file_from_args<I, T>(args: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut found = None;
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        let Some(arg) = arg.to_str().map(str::to_owned) else {
            continue;
        };

        if arg == "--" {
            break;
        }
        if arg == ENV_FILE_FLAG {
            if let Some(value) = args.next() {
                found = Some(PathBuf::from(value));
            }
        } else if let Some(value) = arg.strip_prefix("--env-file=") {
            found = Some(PathBuf::from(value));
        }
    }

    found
}

/// Environment variables read by [`Args`].
#[cfg(test)]
pub(crate) const ENV_VARS: &[&str] = &[
    "PLUGIN_MESSAGE",
    "PLUGIN_AUTH_TOKEN",
    "PLUGIN_ROOMID",
    "PLUGIN_ROOMNAME",
    "PLUGIN_BASE_URL",
    "PLUGIN_TIMEOUT",
    "DRONE_SERVER",
    "DRONE_REPO_OWNER",
    "DRONE_REPO_NAME",
    "DRONE_REPO",
    "DRONE_COMMIT_SHA",
    "DRONE_COMMIT_REF",
    "DRONE_COMMIT_BRANCH",
    "DRONE_COMMIT_AUTHOR",
    "DRONE_COMMIT_AUTHOR_EMAIL",
    "DRONE_COMMIT_LINK",
    "DRONE_COMMIT_MESSAGE",
    "DRONE_BUILD_EVENT",
    "DRONE_BUILD_NUMBER",
    "DRONE_BUILD_STATUS",
    "DRONE_BUILD_LINK",
    "DRONE_BUILD_STARTED",
    "DRONE_BUILD_CREATED",
    "DRONE_TAG",
    "DRONE_JOB_STARTED",
];

#[cfg(test)]
mod tests {
    use super::*;

    /// Parses `argv` with only the given plugin variables set.
    fn parse_with_env(argv: &[&str], vars: &[(&str, &str)]) -> Result<Args, clap::Error> {
        let kvs: Vec<(&str, Option<&str>)> = ENV_VARS
            .iter()
            .map(|key| {
                let value = vars.iter().find(|(k, _)| k == key).map(|(_, v)| *v);
                (*key, value)
            })
            .collect();

        temp_env::with_vars(kvs, || {
            Args::try_parse_from(std::iter::once("drone-spark").chain(argv.iter().copied()))
        })
    }

    #[test]
    fn reads_drone_environment() {
        let args = parse_with_env(
            &[],
            &[
                ("PLUGIN_AUTH_TOKEN", "T"),
                ("PLUGIN_ROOMNAME", "Team"),
                ("PLUGIN_MESSAGE", "hello"),
                ("DRONE_REPO_OWNER", "octocat"),
                ("DRONE_REPO_NAME", "hello-world"),
                ("DRONE_REPO", "octocat/hello-world"),
                ("DRONE_COMMIT_SHA", "abc123"),
                ("DRONE_COMMIT_BRANCH", "main"),
                ("DRONE_COMMIT_AUTHOR", "Octo Cat"),
                ("DRONE_COMMIT_AUTHOR_EMAIL", "octocat@example.com"),
                ("DRONE_COMMIT_MESSAGE", "Update README"),
                ("DRONE_BUILD_EVENT", "tag"),
                ("DRONE_BUILD_NUMBER", "42"),
                ("DRONE_BUILD_STATUS", "failure"),
                ("DRONE_BUILD_STARTED", "1700000000"),
                ("DRONE_TAG", "v1.0.0"),
                ("DRONE_JOB_STARTED", "1700000005"),
            ],
        )
        .unwrap();

        let repo = args.repository();
        assert_eq!(repo.owner, "octocat");
        assert_eq!(repo.name, "hello-world");
        assert_eq!(repo.full_name, "octocat/hello-world");

        let build = args.build();
        assert_eq!(build.commit, "abc123");
        assert_eq!(build.branch, "main");
        assert_eq!(build.author, "Octo Cat");
        assert_eq!(build.email, "octocat@example.com");
        assert_eq!(build.message, "Update README");
        assert_eq!(build.event, "tag");
        assert_eq!(build.number, 42);
        assert_eq!(build.status, "failure");
        assert_eq!(build.started, 1_700_000_000);
        assert_eq!(build.tag, "v1.0.0");
        assert_eq!(args.job().started, 1_700_000_005);

        let config = args.notifier_config();
        assert_eq!(config.delivery().auth_token(), "T");
        assert_eq!(config.delivery().room_id(), None);
        assert_eq!(config.delivery().room_name(), Some("Team"));
        assert_eq!(config.delivery().message(), Some("hello"));
    }

    #[test]
    fn applies_defaults() {
        let args = parse_with_env(&["--auth-token", "T", "--room-id", "R1"], &[]).unwrap();

        let build = args.build();
        assert_eq!(build.git_ref, "refs/heads/master");
        assert_eq!(build.branch, "master");
        assert_eq!(build.event, "push");
        assert_eq!(build.status, "success");
        assert_eq!(build.number, 0);

        let config = args.notifier_config();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.delivery().room_id(), Some("R1"));
        assert_eq!(config.delivery().message(), None);
    }

    #[test]
    fn flags_override_environment() {
        let args = parse_with_env(
            &["--auth-token", "flag-token", "--build-status", "success"],
            &[("PLUGIN_AUTH_TOKEN", "env-token"), ("DRONE_BUILD_STATUS", "failure")],
        )
        .unwrap();

        assert_eq!(args.notifier_config().delivery().auth_token(), "flag-token");
        assert_eq!(args.build().status, "success");
    }

    #[test]
    fn requires_auth_token() {
        let result = parse_with_env(&["--room-id", "R1"], &[]);
        assert!(result.is_err());
    }

    #[test]
    fn requires_positive_timeout() {
        let from_flag = parse_with_env(&["--auth-token", "T", "--timeout-secs", "0"], &[]);
        assert!(from_flag.is_err());

        let from_env = parse_with_env(&["--auth-token", "T"], &[("PLUGIN_TIMEOUT", "0")]);
        assert!(from_env.is_err());
    }

    #[test]
    fn reads_timeout_and_base_url() {
        let args = parse_with_env(
            &["--auth-token", "T"],
            &[("PLUGIN_TIMEOUT", "5"), ("PLUGIN_BASE_URL", "http://localhost:8080/v1")],
        )
        .unwrap();

        let config = args.notifier_config();
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.base_url(), "http://localhost:8080/v1");
    }

    #[test]
    fn finds_env_file_flag() {
        assert_eq!(
            env_file_from_args(["drone-spark", "--env-file", ".env"]),
            Some(PathBuf::from(".env"))
        );
        assert_eq!(
            env_file_from_args(["drone-spark", "--room-id", "R1", "--env-file=ci.env"]),
            Some(PathBuf::from("ci.env"))
        );
        assert_eq!(
            env_file_from_args(["drone-spark", "--env-file=a.env", "--env-file", "b.env"]),
            Some(PathBuf::from("b.env"))
        );
    }

    #[test]
    fn ignores_missing_or_escaped_env_file() {
        assert_eq!(env_file_from_args(["drone-spark", "--room-id", "R1"]), None);
        assert_eq!(env_file_from_args(["drone-spark", "--env-file"]), None);
        assert_eq!(
            env_file_from_args(["drone-spark", "--", "--env-file", ".env"]),
            None
        );
    }
}
