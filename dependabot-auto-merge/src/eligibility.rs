//! Eligibility checks for Dependabot pull requests.

use crate::github::PullRequest;
use crate::safety::is_version_bump_safe;
use chrono::{DateTime, Utc};
use tracing::{debug, error};

/// Login of the Dependabot app user.
pub const DEPENDABOT_LOGIN: &str = "dependabot[bot]";

/// Minimum age in milliseconds (one week), reserved for gating fresh pull requests.
pub const MINIMUM_AGE_MS: i64 = 604_800_000;

/// Returns the pull request if it may be approved and merged.
///
/// A pull request is approvable when Dependabot authored it and every
/// version bump in its description is semver-compatible. Errors while
/// evaluating are logged and the pull request is treated as not approvable,
/// so one malformed description never stops the rest of the run.
#[must_use]
pub fn check_approvable(
    pull_request: PullRequest,
    organization: &str,
    repository: &str,
    now: DateTime<Utc>,
) -> Option<PullRequest> {
    if let Some(created_at) = pull_request.created_at {
        if (now - created_at).num_milliseconds() < MINIMUM_AGE_MS {
            // Not enforced yet; the scheduler cadence gates freshness for now.
            debug!(
                pr_number = pull_request.number,
                created_at = %created_at,
                "Pull request is younger than the minimum age"
            );
        }
    }

    if pull_request.author.as_deref() != Some(DEPENDABOT_LOGIN) {
        debug!(
            pr_number = pull_request.number,
            author = pull_request.author.as_deref().unwrap_or_default(),
            "Skipping pull request not opened by Dependabot"
        );
        return None;
    }

    match is_version_bump_safe(pull_request.body.as_deref().unwrap_or_default()) {
        Ok(true) => Some(pull_request),
        Ok(false) => {
            debug!(
                pr_number = pull_request.number,
                "Skipping pull request with a breaking version bump"
            );
            None
        }
        Err(e) => {
            error!(
                pr_number = pull_request.number,
                org = organization,
                repo = repository,
                error = %e,
                "Pull request approval check failed"
            );
            None
        }
    }
}
