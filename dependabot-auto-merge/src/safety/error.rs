//! Version safety error types.

use thiserror::Error;

/// Errors that can occur while classifying a version bump.
#[derive(Debug, Error)]
pub enum SafetyError {
    /// A matched line carried a version the semver parser rejected.
    #[error("Invalid version '{version}' in line '{line}': {source}")]
    InvalidVersion {
        version: String,
        line: String,
        #[source]
        source: semver::Error,
    },
}
