//! Auto-merge method.

use serde::Deserialize;

/// Merge method used once auto-merge fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeMethod {
    /// Create a merge commit.
    Merge,
    /// Squash all commits into one.
    Squash,
    /// Rebase commits onto the base branch.
    Rebase,
}

impl MergeMethod {
    /// Returns the GraphQL `PullRequestMergeMethod` value.
    #[must_use]
    pub fn as_graphql(&self) -> &'static str {
        match self {
            Self::Merge => "MERGE",
            Self::Squash => "SQUASH",
            Self::Rebase => "REBASE",
        }
    }
}
