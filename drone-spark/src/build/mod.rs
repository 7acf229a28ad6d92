//! Build metadata handed to the plugin by the CI pipeline.
//!
//! These types are plain immutable data. They are populated once at startup
//! (by the CLI, from Drone's environment) and only read afterwards.

mod build_info;
mod job;
mod repository;

pub use build_info::BuildInfo;
pub use job::JobInfo;
pub use repository::RepositoryInfo;
