//! Pull request information.

use chrono::{DateTime, Utc};

/// An open pull request as listed by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    /// Pull request number.
    pub number: u64,

    /// Login of the author (e.g. `dependabot[bot]`).
    pub author: Option<String>,

    /// Pull request description.
    pub body: Option<String>,

    /// When the pull request was opened.
    pub created_at: Option<DateTime<Utc>>,

    /// Pull request title.
    pub title: Option<String>,

    /// Web URL of the pull request.
    pub html_url: Option<String>,

    /// GraphQL node id, required to enable auto-merge.
    pub node_id: Option<String>,
}

impl PullRequest {
    /// Creates a pull request with only a number set.
    #[must_use]
    pub fn new(number: u64) -> Self {
        Self {
            number,
            author: None,
            body: None,
            created_at: None,
            title: None,
            html_url: None,
            node_id: None,
        }
    }

    /// Sets the author login.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the creation timestamp.
    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Sets the GraphQL node id.
    #[must_use]
    pub fn with_node_id(mut self, node_id: impl Into<String>) -> Self {
        self.node_id = Some(node_id.into());
        self
    }
}

impl From<octocrab::models::pulls::PullRequest> for PullRequest {
    fn from(pr: octocrab::models::pulls::PullRequest) -> Self {
        Self {
            number: pr.number,
            author: pr.user.map(|user| user.login),
            body: pr.body,
            created_at: pr.created_at,
            title: pr.title,
            html_url: pr.html_url.map(|url| url.to_string()),
            node_id: pr.node_id,
        }
    }
}
