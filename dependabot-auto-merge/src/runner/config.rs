//! Runner configuration.

use crate::config::{ConcurrencyLimits, ConfigError, ConfigFile, OrganizationRepoMap};

/// Configuration for a single run.
///
/// Built once at startup and read-only for the rest of the run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Organizations and repositories to scan.
    organizations: OrganizationRepoMap,
    /// Concurrency ceilings per level.
    concurrency: ConcurrencyLimits,
    /// Whether to evaluate pull requests without approving or merging.
    dry_run: bool,
}

impl RunnerConfig {
    /// Creates a sequential, live configuration for the given repositories.
    pub fn new(organizations: OrganizationRepoMap) -> Self {
        Self {
            organizations,
            concurrency: ConcurrencyLimits::default(),
            dry_run: false,
        }
    }

    /// Builds the configuration from the triggering `owner/repo` and an
    /// optional config file.
    ///
    /// Repositories listed in the file are scanned after the triggering one.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRepository`] if `repository` is not of
    /// the form `owner/repo`.
    pub fn from_context(repository: &str, file: Option<&ConfigFile>) -> Result<Self, ConfigError> {
        let mut organizations = OrganizationRepoMap::from_context(repository)?;
        let mut config = Self::new(OrganizationRepoMap::new());

        if let Some(file) = file {
            for (organization, repositories) in &file.organizations {
                for repository in repositories {
                    organizations.insert(organization.as_str(), repository.as_str());
                }
            }
            config = config.with_concurrency(file.concurrency);
        }

        config.organizations = organizations;
        Ok(config)
    }

    /// Sets the concurrency ceilings.
    pub fn with_concurrency(mut self, concurrency: ConcurrencyLimits) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Enables or disables dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the organizations and repositories to scan.
    pub fn organizations(&self) -> &OrganizationRepoMap {
        &self.organizations
    }

    /// Returns the concurrency ceilings.
    pub fn concurrency(&self) -> ConcurrencyLimits {
        self.concurrency
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_only_config_is_sequential() {
        let config = RunnerConfig::from_context("acme/api", None).unwrap();

        assert_eq!(config.organizations().repository_count(), 1);
        assert_eq!(config.concurrency(), ConcurrencyLimits::uniform(1));
        assert!(!config.dry_run());
    }

    #[test]
    fn file_extends_context_repositories() {
        let mut file = ConfigFile {
            concurrency: ConcurrencyLimits::uniform(4),
            ..ConfigFile::default()
        };
        file.organizations.insert(
            "acme".to_string(),
            vec!["api".to_string(), "web".to_string()],
        );
        file.organizations
            .insert("globex".to_string(), vec!["billing".to_string()]);

        let config = RunnerConfig::from_context("acme/api", Some(&file)).unwrap();

        let entries: Vec<_> = config.organizations().iter().collect();
        assert_eq!(entries[0].0, "acme");
        assert_eq!(entries[0].1, ["api".to_string(), "web".to_string()]);
        assert_eq!(entries[1].0, "globex");
        assert_eq!(config.concurrency(), ConcurrencyLimits::uniform(4));
    }

    #[test]
    fn rejects_invalid_context() {
        assert!(matches!(
            RunnerConfig::from_context("not-a-repo", None),
            Err(ConfigError::InvalidRepository { .. })
        ));
    }
}
