#![allow(dead_code)]

pub mod mock_host;

use chrono::{DateTime, Utc};
use dependabot_auto_merge::{PullRequest, DEPENDABOT_LOGIN};

/// Fixed evaluation instant used by all runs in tests.
pub fn now() -> DateTime<Utc> {
    "2024-03-01T12:00:00Z".parse().unwrap()
}

/// A Dependabot pull request with the given description.
pub fn dependabot_pr(number: u64, body: &str) -> PullRequest {
    PullRequest::new(number)
        .with_author(DEPENDABOT_LOGIN)
        .with_body(body)
        .with_created_at("2024-02-20T08:30:00Z".parse().unwrap())
        .with_node_id(format!("PR_node{number}"))
}

/// A pull request opened by a person.
pub fn human_pr(number: u64, body: &str) -> PullRequest {
    PullRequest::new(number)
        .with_author("octocat")
        .with_body(body)
        .with_created_at("2024-02-20T08:30:00Z".parse().unwrap())
        .with_node_id(format!("PR_node{number}"))
}
