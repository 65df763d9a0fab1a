//! Pull request host error types.

use thiserror::Error;

/// Errors that can occur while talking to the pull request host.
#[derive(Debug, Error)]
pub enum HostError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The host accepted the request but reported a failure.
    #[error("Host rejected the request: {message}")]
    Rejected { message: String },

    /// The pull request has no GraphQL node id.
    #[error("Pull request #{number} has no node id")]
    MissingNodeId { number: u64 },
}
