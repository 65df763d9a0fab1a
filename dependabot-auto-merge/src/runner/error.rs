//! Runner error types.

use crate::config::ConfigError;
use crate::github::HostError;

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Host client initialization errors.
    #[error(transparent)]
    Host(#[from] HostError),

    /// Listing a repository's pull requests failed.
    #[error("Failed to list pull requests for {organization}/{repository}: {source}")]
    ListPullRequests {
        organization: String,
        repository: String,
        #[source]
        source: HostError,
    },
}
