//! Run summary types.

use super::result::RepositoryReport;
use crate::merge::MergeOutcome;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of organizations processed.
    pub organizations_processed: usize,

    /// Number of repositories processed.
    pub repositories_processed: usize,

    /// Number of open pull requests listed.
    pub pull_requests_listed: usize,

    /// Number of pull requests that passed the eligibility checks.
    pub pull_requests_eligible: usize,

    /// Number of approving reviews submitted.
    pub approvals_submitted: usize,

    /// Number of pull requests with auto-merge enabled.
    pub auto_merges_enabled: usize,

    /// Number of pull requests previewed in dry-run mode.
    pub previewed: usize,

    /// Number of pull requests whose approval or auto-merge failed.
    pub merges_failed: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with a repository report.
    pub fn record_report(&mut self, report: &RepositoryReport) {
        self.repositories_processed += 1;
        self.pull_requests_listed += report.pull_requests_listed;
        self.pull_requests_eligible += report.eligible();

        for outcome in &report.outcomes {
            match outcome {
                MergeOutcome::AutoMergeEnabled { approved_now, .. } => {
                    self.auto_merges_enabled += 1;
                    if *approved_now {
                        self.approvals_submitted += 1;
                    }
                }
                MergeOutcome::Previewed { .. } => self.previewed += 1,
                MergeOutcome::Failed { .. } => self.merges_failed += 1,
            }
        }
    }

    /// Returns true if any pull request failed to merge.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.merges_failed > 0
    }
}
