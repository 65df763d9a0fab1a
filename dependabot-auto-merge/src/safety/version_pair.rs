//! Version bump lines emitted by Dependabot.

use regex::Regex;
use std::sync::LazyLock;

/// Matches ``Updates `@nestjs/jwt` from 9.0.0 to 10.0.1``.
static UPDATES_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Updates `[@a-zA-Z\-/0-9]+` from ([0-9.]+) to ([0-9.]+)$")
        .expect("updates line pattern is valid")
});

/// Matches `Bumps [@nestjs/axios](https://github.com/nestjs/axios) from 0.1.0 to 1.0.1.`
static BUMPS_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^Bumps \[[@a-zA-Z\-/0-9]+\]\(https://github\.com/.*\) from ([0-9.]+) to ([0-9.]+)\.$",
    )
    .expect("bumps line pattern is valid")
});

/// An old/new version pair taken from a single description line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionPair<'a> {
    /// Version the dependency is bumped from.
    pub old_version: &'a str,

    /// Version the dependency is bumped to.
    pub new_version: &'a str,
}

impl<'a> VersionPair<'a> {
    /// Recognizes a single line against the known Dependabot templates.
    ///
    /// The `Updates` template is tried first. Lines matching neither
    /// template yield `None`.
    #[must_use]
    pub fn from_line(line: &'a str) -> Option<Self> {
        Self::match_template(&UPDATES_LINE, line)
            .or_else(|| Self::match_template(&BUMPS_LINE, line))
    }

    fn match_template(template: &Regex, line: &'a str) -> Option<Self> {
        let captures = template.captures(line)?;
        Some(Self {
            old_version: captures.get(1)?.as_str(),
            new_version: captures.get(2)?.as_str(),
        })
    }
}
