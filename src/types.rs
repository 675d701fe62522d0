use chrono::{DateTime, Utc};
use serde::Deserialize;

// GitHub API response structures
#[derive(Debug, Clone, Deserialize)]
pub struct IssueSearchResult {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    #[serde(default)]
    pub items: Vec<Issue>,
}

/// A search hit. For `type:pr` queries every issue is backed by a pull request.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub url: String,
    pub title: String,
    pub number: u64,
    pub created_at: DateTime<Utc>,
}

/// Pull request detail. Missing counters deserialize as zero, and `Default`
/// is what gets printed when the fetch fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PullRequest {
    #[serde(default)]
    pub changed_files: u64,
    #[serde(default)]
    pub additions: u64,
    #[serde(default)]
    pub deletions: u64,
    #[serde(default)]
    pub comments: u64,
}
