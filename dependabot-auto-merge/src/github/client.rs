//! GitHub implementation of [`PullRequestHost`] using octocrab.

use super::{HostError, MergeMethod, PullRequest, PullRequestHost};
use async_trait::async_trait;
use octocrab::models::pulls::ReviewState;
use octocrab::{params, Octocrab};
use serde::Deserialize;
use tracing::debug;

/// Results per page when listing pull requests.
const RESULTS_PER_PAGE: u8 = 100;

const ENABLE_AUTO_MERGE_MUTATION: &str = r"
    mutation EnablePullRequestAutoMerge($pullRequestId: ID!, $mergeMethod: PullRequestMergeMethod) {
        enablePullRequestAutoMerge(input: { pullRequestId: $pullRequestId, mergeMethod: $mergeMethod }) {
            pullRequest {
                number
            }
        }
    }
";

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnableAutoMergeData {
    enable_pull_request_auto_merge: Option<serde_json::Value>,
}

/// GitHub host backed by an authenticated octocrab client.
#[derive(Clone)]
pub struct GitHubHost {
    client: Octocrab,
    merge_method: Option<MergeMethod>,
}

impl GitHubHost {
    /// Builds a host authenticated with a personal or Actions token.
    ///
    /// `api_url` overrides the API base URL (GitHub Enterprise Server).
    ///
    /// # Errors
    ///
    /// Returns [`HostError::GitHubError`] if the client cannot be built.
    pub fn new(token: &str, api_url: Option<&str>) -> Result<Self, HostError> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());
        if let Some(url) = api_url {
            builder = builder.base_uri(url)?;
        }

        Ok(Self {
            client: builder.build()?,
            merge_method: None,
        })
    }

    /// Sets the merge method used when auto-merge is enabled.
    #[must_use]
    pub fn with_merge_method(mut self, merge_method: Option<MergeMethod>) -> Self {
        self.merge_method = merge_method;
        self
    }
}

#[async_trait]
impl PullRequestHost for GitHubHost {
    async fn list_pull_requests(
        &self,
        organization: &str,
        repository: &str,
    ) -> Result<Vec<PullRequest>, HostError> {
        debug!(org = organization, repo = repository, "Listing open pull requests");

        let page = self
            .client
            .pulls(organization, repository)
            .list()
            .state(params::State::Open)
            .per_page(RESULTS_PER_PAGE)
            .send()
            .await?;
        let pulls = self.client.all_pages(page).await?;

        Ok(pulls.into_iter().map(PullRequest::from).collect())
    }

    async fn is_approved(
        &self,
        pull_request: &PullRequest,
        organization: &str,
        repository: &str,
    ) -> Result<bool, HostError> {
        let page = self
            .client
            .pulls(organization, repository)
            .list_reviews(pull_request.number)
            .send()
            .await?;
        let reviews = self.client.all_pages(page).await?;

        Ok(reviews
            .iter()
            .any(|review| review.state == Some(ReviewState::Approved)))
    }

    async fn approve(
        &self,
        pull_request: &PullRequest,
        organization: &str,
        repository: &str,
    ) -> Result<(), HostError> {
        debug!(pr_number = pull_request.number, "Submitting approving review");

        let route = format!(
            "/repos/{organization}/{repository}/pulls/{}/reviews",
            pull_request.number
        );
        let _review: serde_json::Value = self
            .client
            .post(route, Some(&serde_json::json!({ "event": "APPROVE" })))
            .await?;

        Ok(())
    }

    async fn enable_auto_merge(
        &self,
        pull_request: &PullRequest,
        _organization: &str,
        _repository: &str,
    ) -> Result<(), HostError> {
        debug!(pr_number = pull_request.number, "Enabling auto-merge");

        let node_id = pull_request
            .node_id
            .as_deref()
            .ok_or(HostError::MissingNodeId {
                number: pull_request.number,
            })?;

        let mut variables = serde_json::json!({ "pullRequestId": node_id });
        if let Some(method) = self.merge_method {
            variables["mergeMethod"] = serde_json::Value::from(method.as_graphql());
        }

        let response: GraphQlResponse<EnableAutoMergeData> = self
            .client
            .graphql(&serde_json::json!({
                "query": ENABLE_AUTO_MERGE_MUTATION,
                "variables": variables,
            }))
            .await?;

        if let Some(errors) = response.errors {
            if !errors.is_empty() {
                let messages: Vec<_> = errors.into_iter().map(|e| e.message).collect();
                return Err(HostError::Rejected {
                    message: messages.join(", "),
                });
            }
        }

        match response.data.and_then(|d| d.enable_pull_request_auto_merge) {
            Some(_) => Ok(()),
            None => Err(HostError::Rejected {
                message: "No data in GraphQL response".to_string(),
            }),
        }
    }
}
