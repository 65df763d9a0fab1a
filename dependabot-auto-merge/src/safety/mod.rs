//! Version bump safety classification.
//!
//! A Dependabot description lists one line per bumped dependency. A bump is
//! considered safe when the new version stays inside the caret range of the
//! old one, which is the range npm and Cargo both treat as non-breaking.

mod error;
mod version_pair;

pub use error::SafetyError;
pub use version_pair::VersionPair;

use semver::{Version, VersionReq};

/// Checks whether every version bump declared in a description is safe.
///
/// Lines that are not Dependabot bump lines are ignored, so a description
/// with no bump lines at all is considered safe.
///
/// # Errors
///
/// Returns [`SafetyError::InvalidVersion`] if a recognized line carries a
/// version that is not valid semver (e.g. `1.2` or `1..2`).
pub fn is_version_bump_safe(description: &str) -> Result<bool, SafetyError> {
    for line in description.lines() {
        let Some(pair) = VersionPair::from_line(line) else {
            continue;
        };

        if !is_compatible(&pair, line)? {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Returns whether `new_version` satisfies `^old_version`.
fn is_compatible(pair: &VersionPair<'_>, line: &str) -> Result<bool, SafetyError> {
    let invalid = |version: &str| {
        let line = line.to_string();
        let version = version.to_string();
        move |source| SafetyError::InvalidVersion {
            version,
            line,
            source,
        }
    };

    let range = VersionReq::parse(&format!("^{}", pair.old_version))
        .map_err(invalid(pair.old_version))?;
    let candidate = Version::parse(pair.new_version).map_err(invalid(pair.new_version))?;

    Ok(range.matches(&candidate))
}
