//! Optional TOML configuration file.

use super::{ConcurrencyLimits, ConfigError};
use crate::github::MergeMethod;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Parsed contents of a configuration file.
///
/// ```toml
/// merge-method = "squash"
///
/// [concurrency]
/// repositories = 2
///
/// [organizations]
/// my-org = ["repo-a", "repo-b"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigFile {
    /// Merge method for auto-merge (defaults to the repository setting).
    pub merge_method: Option<MergeMethod>,

    /// Concurrency ceilings per level.
    #[serde(default)]
    pub concurrency: ConcurrencyLimits,

    /// Extra organizations and repositories to scan.
    #[serde(default)]
    pub organizations: BTreeMap<String, Vec<String>>,
}

impl ConfigFile {
    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file can't be read, isn't valid TOML,
    /// or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading config file");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let file: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        file.validate(path)?;
        Ok(file)
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::ValidationError {
            path: path.display().to_string(),
            message,
        };

        if let Some(level) = self.concurrency.zero_level() {
            return Err(invalid(format!("concurrency.{level} must be at least 1")));
        }

        for (organization, repositories) in &self.organizations {
            if organization.trim().is_empty() {
                return Err(invalid("organization name is empty".to_string()));
            }
            if repositories.iter().any(|repo| repo.trim().is_empty()) {
                return Err(invalid(format!(
                    "organization '{organization}' lists an empty repository name"
                )));
            }
        }

        Ok(())
    }
}
