//! Mock pull request host for testing.

#![allow(dead_code)]

use async_trait::async_trait;
use dependabot_auto_merge::{HostError, PullRequest, PullRequestHost};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Recording mock for [`PullRequestHost`].
///
/// Features:
/// - Configurable pull requests per repository
/// - Pre-approved pull requests
/// - Call tracking for verification
/// - Error injection per repository or pull request
#[derive(Default)]
pub struct MockHost {
    pull_requests: Mutex<HashMap<String, Vec<PullRequest>>>,
    approved: Mutex<HashSet<u64>>,
    // Call tracking
    list_calls: Mutex<Vec<String>>,
    is_approved_calls: Mutex<Vec<u64>>,
    approve_calls: Mutex<Vec<u64>>,
    auto_merge_calls: Mutex<Vec<u64>>,
    // Error injection
    error_on_list: Mutex<HashMap<String, String>>,
    error_on_is_approved: Mutex<HashMap<u64, String>>,
    error_on_approve: Mutex<HashMap<u64, String>>,
    error_on_auto_merge: Mutex<HashMap<u64, String>>,
}

fn full_name(organization: &str, repository: &str) -> String {
    format!("{organization}/{repository}")
}

fn injected(errors: &Mutex<HashMap<u64, String>>, number: u64) -> Result<(), HostError> {
    match errors.lock().unwrap().get(&number) {
        Some(message) => Err(HostError::Rejected {
            message: message.clone(),
        }),
        None => Ok(()),
    }
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    // === Response setup ===

    /// Sets the open pull requests of a repository.
    pub fn set_pull_requests(&self, organization: &str, repository: &str, prs: Vec<PullRequest>) {
        self.pull_requests
            .lock()
            .unwrap()
            .insert(full_name(organization, repository), prs);
    }

    /// Marks a pull request as already approved.
    pub fn set_approved(&self, number: u64) {
        self.approved.lock().unwrap().insert(number);
    }

    // === Error injection methods ===

    pub fn fail_list(&self, organization: &str, repository: &str, msg: &str) {
        self.error_on_list
            .lock()
            .unwrap()
            .insert(full_name(organization, repository), msg.to_string());
    }

    pub fn fail_is_approved(&self, number: u64, msg: &str) {
        self.error_on_is_approved
            .lock()
            .unwrap()
            .insert(number, msg.to_string());
    }

    pub fn fail_approve(&self, number: u64, msg: &str) {
        self.error_on_approve
            .lock()
            .unwrap()
            .insert(number, msg.to_string());
    }

    pub fn fail_auto_merge(&self, number: u64, msg: &str) {
        self.error_on_auto_merge
            .lock()
            .unwrap()
            .insert(number, msg.to_string());
    }

    // === Call inspection ===

    pub fn list_calls(&self) -> Vec<String> {
        self.list_calls.lock().unwrap().clone()
    }

    pub fn is_approved_calls(&self) -> Vec<u64> {
        self.is_approved_calls.lock().unwrap().clone()
    }

    pub fn approve_calls(&self) -> Vec<u64> {
        self.approve_calls.lock().unwrap().clone()
    }

    pub fn auto_merge_calls(&self) -> Vec<u64> {
        self.auto_merge_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PullRequestHost for MockHost {
    async fn list_pull_requests(
        &self,
        organization: &str,
        repository: &str,
    ) -> Result<Vec<PullRequest>, HostError> {
        let name = full_name(organization, repository);
        self.list_calls.lock().unwrap().push(name.clone());

        if let Some(message) = self.error_on_list.lock().unwrap().get(&name) {
            return Err(HostError::Rejected {
                message: message.clone(),
            });
        }

        Ok(self
            .pull_requests
            .lock()
            .unwrap()
            .get(&name)
            .cloned()
            .unwrap_or_default())
    }

    async fn is_approved(
        &self,
        pull_request: &PullRequest,
        _organization: &str,
        _repository: &str,
    ) -> Result<bool, HostError> {
        self.is_approved_calls
            .lock()
            .unwrap()
            .push(pull_request.number);
        injected(&self.error_on_is_approved, pull_request.number)?;

        Ok(self.approved.lock().unwrap().contains(&pull_request.number))
    }

    async fn approve(
        &self,
        pull_request: &PullRequest,
        _organization: &str,
        _repository: &str,
    ) -> Result<(), HostError> {
        self.approve_calls.lock().unwrap().push(pull_request.number);
        injected(&self.error_on_approve, pull_request.number)?;

        self.approved.lock().unwrap().insert(pull_request.number);
        Ok(())
    }

    async fn enable_auto_merge(
        &self,
        pull_request: &PullRequest,
        _organization: &str,
        _repository: &str,
    ) -> Result<(), HostError> {
        self.auto_merge_calls
            .lock()
            .unwrap()
            .push(pull_request.number);
        injected(&self.error_on_auto_merge, pull_request.number)
    }
}
