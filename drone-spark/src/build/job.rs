//! Job metadata.

/// The pipeline job running the plugin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JobInfo {
    /// Unix timestamp when the job started.
    pub started: i64,
}
