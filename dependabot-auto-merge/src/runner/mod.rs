//! Orchestrates a Dependabot auto-merge run.
//!
//! A run walks organizations, then repositories, then pull requests. Each
//! level fans out through its own bounded pool. Within a repository every
//! pull request is checked for eligibility before any of them is merged.

mod config;
mod error;
mod pool;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::eligibility::check_approvable;
use crate::github::{PullRequest, PullRequestHost};
use crate::merge::merge_pull_request;
use crate::summary::{RepositoryReport, RunSummary};
use chrono::{DateTime, Utc};
use pool::{for_each_bounded, try_for_each_bounded};
use tracing::{info, info_span, warn, Instrument};

/// Runs one auto-merge pass against a pull request host.
pub struct Runner<H> {
    config: RunnerConfig,
    host: H,
}

impl<H: PullRequestHost> Runner<H> {
    /// Builds a runner from the provided configuration and host.
    pub fn new(config: RunnerConfig, host: H) -> Self {
        Self { config, host }
    }

    /// Returns the pull request host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Executes the full orchestration flow.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::ListPullRequests`] if a repository's pull
    /// requests can't be listed. Failures on individual pull requests are
    /// logged and counted in the summary instead.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        self.run_at(Utc::now()).await
    }

    /// Executes the run, evaluating pull request age against `now`.
    ///
    /// # Errors
    ///
    /// See [`Runner::run`].
    pub async fn run_at(&self, now: DateTime<Utc>) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new(self.config.dry_run());
        let organizations = self.config.organizations();

        if organizations.is_empty() {
            warn!("No repositories configured");
            return Ok(summary);
        }

        info!(
            organizations = organizations.len(),
            repositories = organizations.repository_count(),
            dry_run = self.config.dry_run(),
            "Starting run"
        );

        let limit = self.config.concurrency().organizations;
        let reports = try_for_each_bounded(
            organizations.iter(),
            limit,
            move |(organization, repositories)| {
                self.process_organization(organization, repositories, now)
            },
        )
        .await?;

        summary.organizations_processed = reports.len();
        for report in reports.iter().flatten() {
            summary.record_report(report);
        }

        Ok(summary)
    }

    async fn process_organization(
        &self,
        organization: &str,
        repositories: &[String],
        now: DateTime<Utc>,
    ) -> Result<Vec<RepositoryReport>, RunnerError> {
        info!(org = organization, count = repositories.len(), "Processing organization");

        let limit = self.config.concurrency().repositories;
        try_for_each_bounded(repositories, limit, move |repository| {
            self.process_repository(organization, repository, now)
        })
        .await
    }

    async fn process_repository(
        &self,
        organization: &str,
        repository: &str,
        now: DateTime<Utc>,
    ) -> Result<RepositoryReport, RunnerError> {
        let span = info_span!("repository", org = organization, repo = repository);

        async {
            let pull_requests = self
                .host
                .list_pull_requests(organization, repository)
                .await
                .map_err(|source| RunnerError::ListPullRequests {
                    organization: organization.to_string(),
                    repository: repository.to_string(),
                    source,
                })?;
            let pull_requests_listed = pull_requests.len();
            info!(count = pull_requests_listed, "Found open pull requests");

            let limits = self.config.concurrency();
            let approvable: Vec<PullRequest> =
                for_each_bounded(pull_requests, limits.filter, move |pull_request| async move {
                    check_approvable(pull_request, organization, repository, now)
                })
                .await
                .into_iter()
                .flatten()
                .collect();
            info!(count = approvable.len(), "Found approvable pull requests");

            let host: &dyn PullRequestHost = &self.host;
            let dry_run = self.config.dry_run();
            let outcomes = for_each_bounded(&approvable, limits.merge, move |pull_request| {
                merge_pull_request(host, pull_request, organization, repository, dry_run)
            })
            .await;

            Ok(RepositoryReport {
                organization: organization.to_string(),
                repository: repository.to_string(),
                pull_requests_listed,
                outcomes,
            })
        }
        .instrument(span)
        .await
    }
}
