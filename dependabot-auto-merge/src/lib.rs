#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod eligibility;
pub mod github;
pub mod merge;
pub mod runner;
pub mod safety;
pub mod summary;

pub use config::{ConcurrencyLimits, ConfigError, ConfigFile, OrganizationRepoMap};
pub use eligibility::{check_approvable, DEPENDABOT_LOGIN, MINIMUM_AGE_MS};
pub use github::{GitHubHost, HostError, MergeMethod, PullRequest, PullRequestHost};
pub use merge::{merge_pull_request, MergeOutcome};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use safety::{is_version_bump_safe, SafetyError, VersionPair};
pub use summary::{RepositoryReport, RunSummary};
