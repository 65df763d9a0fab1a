//! Per-repository results.

use crate::merge::MergeOutcome;

/// Result of processing a single repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryReport {
    /// Organization name.
    pub organization: String,

    /// Repository name.
    pub repository: String,

    /// Number of open pull requests listed.
    pub pull_requests_listed: usize,

    /// One outcome per eligible pull request.
    pub outcomes: Vec<MergeOutcome>,
}

impl RepositoryReport {
    /// Returns the number of pull requests that passed the eligibility checks.
    #[must_use]
    pub fn eligible(&self) -> usize {
        self.outcomes.len()
    }
}
