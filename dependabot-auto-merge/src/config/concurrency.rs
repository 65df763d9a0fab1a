//! Per-level concurrency ceilings.

use serde::Deserialize;

/// Maximum number of in-flight tasks for each level of the run.
///
/// Every level defaults to 1, which processes organizations, repositories
/// and pull requests strictly one after another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConcurrencyLimits {
    /// Organizations processed at once.
    pub organizations: usize,

    /// Repositories processed at once within an organization.
    pub repositories: usize,

    /// Pull requests checked for eligibility at once within a repository.
    pub filter: usize,

    /// Eligible pull requests approved and merged at once within a repository.
    pub merge: usize,
}

impl Default for ConcurrencyLimits {
    fn default() -> Self {
        Self::uniform(1)
    }
}

impl ConcurrencyLimits {
    /// Uses the same ceiling for every level.
    #[must_use]
    pub fn uniform(limit: usize) -> Self {
        Self {
            organizations: limit,
            repositories: limit,
            filter: limit,
            merge: limit,
        }
    }

    /// Returns the name of the first level whose ceiling is zero.
    #[must_use]
    pub fn zero_level(&self) -> Option<&'static str> {
        [
            ("organizations", self.organizations),
            ("repositories", self.repositories),
            ("filter", self.filter),
            ("merge", self.merge),
        ]
        .into_iter()
        .find(|(_, limit)| *limit == 0)
        .map(|(level, _)| level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_sequential() {
        assert_eq!(ConcurrencyLimits::default(), ConcurrencyLimits::uniform(1));
        assert_eq!(ConcurrencyLimits::default().zero_level(), None);
    }

    #[test]
    fn finds_zero_level() {
        let limits = ConcurrencyLimits {
            merge: 0,
            ..ConcurrencyLimits::default()
        };
        assert_eq!(limits.zero_level(), Some("merge"));
    }
}
