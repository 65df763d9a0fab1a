//! Approval and auto-merge of eligible pull requests.

mod outcome;

pub use outcome::MergeOutcome;

use crate::github::{HostError, PullRequest, PullRequestHost};
use tracing::{error, info};

/// Approves a pull request if needed, then enables auto-merge.
///
/// Approval is skipped when the pull request already has an approving
/// review; auto-merge is requested either way. Failures are logged and
/// reported as [`MergeOutcome::Failed`] so sibling pull requests carry on.
/// With `dry_run` set, the host is not called at all.
pub async fn merge_pull_request(
    host: &dyn PullRequestHost,
    pull_request: &PullRequest,
    organization: &str,
    repository: &str,
    dry_run: bool,
) -> MergeOutcome {
    if dry_run {
        info!(
            pr_number = pull_request.number,
            title = pull_request.title.as_deref().unwrap_or_default(),
            "[DRY RUN] Would approve and enable auto-merge"
        );
        return MergeOutcome::Previewed {
            number: pull_request.number,
        };
    }

    match approve_and_enable_auto_merge(host, pull_request, organization, repository).await {
        Ok(approved_now) => {
            info!(
                pr_number = pull_request.number,
                approved_now, "Auto-merge enabled"
            );
            MergeOutcome::AutoMergeEnabled {
                number: pull_request.number,
                approved_now,
            }
        }
        Err(e) => {
            error!(
                pr_number = pull_request.number,
                org = organization,
                repo = repository,
                error = %e,
                "Merge pull request failed"
            );
            MergeOutcome::Failed {
                number: pull_request.number,
                error: e.to_string(),
            }
        }
    }
}

/// Returns whether an approval was submitted.
async fn approve_and_enable_auto_merge(
    host: &dyn PullRequestHost,
    pull_request: &PullRequest,
    organization: &str,
    repository: &str,
) -> Result<bool, HostError> {
    let approved_now = if host
        .is_approved(pull_request, organization, repository)
        .await?
    {
        false
    } else {
        host.approve(pull_request, organization, repository).await?;
        true
    };

    host.enable_auto_merge(pull_request, organization, repository)
        .await?;

    Ok(approved_now)
}
