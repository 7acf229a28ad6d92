//! CLI for the Drone Spark plugin.
//!
//! Reads build metadata and plugin settings from Drone's environment (or the
//! equivalent flags) and posts a build status notification to a Webex Teams
//! room.

mod args;

use args::{env_file_from_args, Args};
use clap::Parser;
use drone_spark::{DeliveryReport, Notifier, NotifierError};
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    // The env file must be loaded before tracing reads RUST_LOG and before
    // clap reads environment fallbacks
    let env_file = env_file_from_args(std::env::args_os()).map(|path| {
        let result = load_env_file(&path);
        (result, path)
    });

    init_tracing();

    if let Some((result, path)) = env_file {
        log_env_file_result(&path, &result);
    }

    let args = Args::parse();

    match run(args).await {
        Ok(report) => {
            info!(
                room_id = %report.room_id,
                messages_sent = report.messages_sent,
                "Done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Failed to deliver build notification");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Loads variables from an env file without overriding ones already set.
///
/// Runs before tracing is initialized, so the outcome is returned and logged
/// afterwards by [`log_env_file_result`].
fn load_env_file(path: &Path) -> Result<(), dotenvy::Error> {
    dotenvy::from_path(path)
}

/// Logs the env file outcome. A missing or unreadable file is not fatal.
fn log_env_file_result(path: &Path, result: &Result<(), dotenvy::Error>) {
    match result {
        Ok(()) => info!(path = %path.display(), "Loaded env file"),
        Err(e) => warn!(path = %path.display(), error = %e, "Failed to load env file"),
    }
}

/// Main execution logic.
async fn run(args: Args) -> Result<DeliveryReport, NotifierError> {
    let repo = args.repository();
    let build = args.build();
    let job = args.job();

    info!(
        repo = %repo.full_name,
        build = build.number,
        commit = %build.commit,
        git_ref = %build.git_ref,
        tag = %build.tag,
        job_started = job.started,
        env_file = ?args.env_file(),
        "Sending build notification"
    );

    let notifier = Notifier::new(args.notifier_config())?;
    notifier.run(&repo, &build).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn env_file_values_feed_env_fallbacks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "PLUGIN_ROOMNAME=Team").unwrap();
        writeln!(file, "DRONE_BUILD_STATUS=failure").unwrap();

        temp_env::with_vars_unset(args::ENV_VARS, || {
            load_env_file(file.path()).unwrap();
            let args = Args::try_parse_from(["drone-spark", "--auth-token", "T"]).unwrap();

            assert_eq!(args.notifier_config().delivery().room_name(), Some("Team"));
            assert_eq!(args.build().status, "failure");
        });
    }

    #[test]
    fn env_file_does_not_override_environment() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "PLUGIN_ROOMID=from-file").unwrap();

        temp_env::with_vars_unset(args::ENV_VARS, || {
            temp_env::with_var("PLUGIN_ROOMID", Some("from-env"), || {
                load_env_file(file.path()).unwrap();
                let args = Args::try_parse_from(["drone-spark", "--auth-token", "T"]).unwrap();

                assert_eq!(args.notifier_config().delivery().room_id(), Some("from-env"));
            });
        });
    }

    #[test]
    fn missing_env_file_is_ignored() {
        temp_env::with_vars_unset(args::ENV_VARS, || {
            let result = load_env_file(Path::new("/nonexistent/drone-spark/.env"));
            log_env_file_result(Path::new("/nonexistent/drone-spark/.env"), &result);

            assert!(result.is_err());
            assert!(std::env::var("PLUGIN_ROOMID").is_err());
        });
    }

    #[test]
    fn env_file_can_set_log_filter() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "RUST_LOG=debug").unwrap();

        temp_env::with_var_unset("RUST_LOG", || {
            load_env_file(file.path()).unwrap();
            assert_eq!(std::env::var("RUST_LOG").as_deref(), Ok("debug"));
            assert!(EnvFilter::try_from_default_env().is_ok());
        });
    }
}
