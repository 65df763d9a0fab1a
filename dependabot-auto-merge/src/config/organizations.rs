//! Organizations and repositories scanned during a run.

use super::ConfigError;

/// Ordered mapping from organization to the repositories to scan.
///
/// Organizations keep insertion order and repositories are de-duplicated
/// per organization, keeping the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationRepoMap {
    entries: Vec<(String, Vec<String>)>,
}

impl OrganizationRepoMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map from the `owner/repo` that triggered the run.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRepository`] if `repository` is not of
    /// the form `owner/repo`.
    pub fn from_context(repository: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidRepository {
            value: repository.to_string(),
        };

        let (owner, name) = repository.trim().split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }

        let mut map = Self::new();
        map.insert(owner, name);
        Ok(map)
    }

    /// Adds a repository under an organization.
    pub fn insert(&mut self, organization: impl Into<String>, repository: impl Into<String>) {
        let organization = organization.into();
        let repository = repository.into();

        match self.entries.iter_mut().find(|(org, _)| *org == organization) {
            Some((_, repositories)) => {
                if !repositories.contains(&repository) {
                    repositories.push(repository);
                }
            }
            None => self.entries.push((organization, vec![repository])),
        }
    }

    /// Iterates over organizations and their repositories in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(org, repositories)| (org.as_str(), repositories.as_slice()))
    }

    /// Returns the number of organizations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no organizations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of repositories across all organizations.
    #[must_use]
    pub fn repository_count(&self) -> usize {
        self.entries.iter().map(|(_, repos)| repos.len()).sum()
    }
}
