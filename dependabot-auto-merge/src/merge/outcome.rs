//! Merge outcome types.

/// Result of approving and enabling auto-merge on one pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Auto-merge was enabled.
    AutoMergeEnabled {
        /// Pull request number.
        number: u64,
        /// Whether an approving review was submitted during this run.
        approved_now: bool,
    },

    /// Dry run; nothing was changed.
    Previewed {
        /// Pull request number.
        number: u64,
    },

    /// Approval or auto-merge failed.
    Failed {
        /// Pull request number.
        number: u64,
        /// Error message.
        error: String,
    },
}

impl MergeOutcome {
    /// Returns the pull request number.
    #[must_use]
    pub fn number(&self) -> u64 {
        match self {
            Self::AutoMergeEnabled { number, .. }
            | Self::Previewed { number }
            | Self::Failed { number, .. } => *number,
        }
    }

    /// Returns the outcome as a string for logs and summaries.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AutoMergeEnabled { .. } => "auto_merge_enabled",
            Self::Previewed { .. } => "previewed",
            Self::Failed { .. } => "failed",
        }
    }
}
