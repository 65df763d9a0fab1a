//! Pull request host abstraction and its GitHub implementation.
//!
//! The rest of the crate only talks to [`PullRequestHost`], so the run can
//! be driven against GitHub in production and against a recording mock in
//! tests.

mod client;
mod error;
mod merge_method;
mod pull_request;

pub use client::GitHubHost;
pub use error::HostError;
pub use merge_method::MergeMethod;
pub use pull_request::PullRequest;

use async_trait::async_trait;

/// Operations the run needs from the source-control host.
#[async_trait]
pub trait PullRequestHost: Send + Sync {
    /// Lists all open pull requests of a repository.
    async fn list_pull_requests(
        &self,
        organization: &str,
        repository: &str,
    ) -> Result<Vec<PullRequest>, HostError>;

    /// Returns whether the pull request already has an approving review.
    async fn is_approved(
        &self,
        pull_request: &PullRequest,
        organization: &str,
        repository: &str,
    ) -> Result<bool, HostError>;

    /// Submits an approving review.
    async fn approve(
        &self,
        pull_request: &PullRequest,
        organization: &str,
        repository: &str,
    ) -> Result<(), HostError>;

    /// Enables auto-merge so the pull request merges once checks pass.
    async fn enable_auto_merge(
        &self,
        pull_request: &PullRequest,
        organization: &str,
        repository: &str,
    ) -> Result<(), HostError>;
}
