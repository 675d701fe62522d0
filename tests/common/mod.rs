#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use prs::error::{PrsError, Result};
use prs::github::GitHubApi;
use prs::types::{Issue, PullRequest};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Fixed-response stand-in for the GitHub API.
///
/// `search` of `None` makes the search fail. Pull requests are keyed by issue
/// number; a missing key makes that fetch fail. Clones share their call logs.
#[derive(Clone)]
pub struct FakeGitHub {
    pub search: Option<Vec<Issue>>,
    pub pulls: HashMap<u64, PullRequest>,
    pub searched_for: Arc<Mutex<Vec<String>>>,
    pub fetched: Arc<Mutex<Vec<(String, String, u64)>>>,
}

impl FakeGitHub {
    pub fn new(issues: Vec<Issue>) -> Self {
        FakeGitHub {
            search: Some(issues),
            pulls: HashMap::new(),
            searched_for: Arc::new(Mutex::new(Vec::new())),
            fetched: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing_search() -> Self {
        FakeGitHub {
            search: None,
            ..Self::new(Vec::new())
        }
    }

    pub fn with_pull(mut self, number: u64, pr: PullRequest) -> Self {
        self.pulls.insert(number, pr);
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetched.lock().unwrap().len()
    }

    pub fn search_count(&self) -> usize {
        self.searched_for.lock().unwrap().len()
    }
}

#[async_trait]
impl GitHubApi for FakeGitHub {
    async fn search_issues(&self, username: &str) -> Result<Vec<Issue>> {
        self.searched_for.lock().unwrap().push(username.to_string());
        self.search
            .clone()
            .ok_or_else(|| PrsError::ApiError("search unavailable".to_string()))
    }

    async fn get_pull_request(&self, owner: &str, repo: &str, number: u64) -> Result<PullRequest> {
        self.fetched
            .lock()
            .unwrap()
            .push((owner.to_string(), repo.to_string(), number));
        self.pulls
            .get(&number)
            .cloned()
            .ok_or_else(|| PrsError::NotFound(format!("{}/{}#{}", owner, repo, number)))
    }
}

pub fn issue(owner: &str, repo: &str, number: u64, title: &str, created_at: &str) -> Issue {
    Issue {
        url: format!(
            "https://api.example.com/repos/{}/{}/issues/{}",
            owner, repo, number
        ),
        title: title.to_string(),
        number,
        created_at: created_at.parse::<DateTime<Utc>>().unwrap(),
    }
}

pub fn pull(changed_files: u64, additions: u64, deletions: u64, comments: u64) -> PullRequest {
    PullRequest {
        changed_files,
        additions,
        deletions,
        comments,
    }
}
