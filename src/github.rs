use crate::config::Config;
use crate::error::{PrsError, Result};
use crate::repo::base_path_segments;
use crate::types::{Issue, IssueSearchResult, PullRequest};
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

const USER_AGENT: &str = concat!("prs/", env!("CARGO_PKG_VERSION"));

/// The two remote operations the listing needs.
#[async_trait]
pub trait GitHubApi {
    /// Open pull requests involving `username`, oldest first.
    async fn search_issues(&self, username: &str) -> Result<Vec<Issue>>;

    async fn get_pull_request(&self, owner: &str, repo: &str, number: u64) -> Result<PullRequest>;

    /// Path segments the API is mounted under, empty for a host-root API.
    fn base_path(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Search query matching open pull requests that involve `username` in any way.
pub fn search_query(username: &str) -> String {
    format!("type:pr involves:{} state:open", username)
}

pub struct GitHubClient {
    client: Client,
    token: String,
    api_url: Url,
}

impl GitHubClient {
    /// Builds the client. Nothing is sent until the first request; the token is
    /// attached per request.
    pub fn new(token: String, api_url: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(GitHubClient {
            client,
            token,
            api_url,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.credentials.token.clone(),
            config.api_url.clone(),
            config.timeout,
        )
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| PrsError::ApiError(format!("API URL cannot be a base: {}", self.api_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn make_request(&self, url: Url, query: &[(&str, &str)]) -> Result<Response> {
        debug!(%url, "GET");

        let response = self
            .client
            .get(url.clone())
            .query(query)
            .header("Accept", "application/vnd.github.v3+json")
            .header("Authorization", format!("token {}", self.token))
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(response),
            reqwest::StatusCode::NOT_FOUND => {
                Err(PrsError::NotFound(format!("Resource not found: {}", url)))
            }
            status => {
                let error_text = response.text().await.unwrap_or_default();
                Err(PrsError::ApiError(format!(
                    "API request failed with status {}: {}",
                    status, error_text
                )))
            }
        }
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn search_issues(&self, username: &str) -> Result<Vec<Issue>> {
        let url = self.endpoint(&["search", "issues"])?;
        let query = search_query(username);

        let response = self
            .make_request(
                url,
                &[("q", query.as_str()), ("sort", "created"), ("order", "asc")],
            )
            .await?;
        let result: IssueSearchResult = response.json().await?;

        if result.incomplete_results {
            warn!(total = result.total_count, "search results are incomplete");
        }
        debug!(
            total = result.total_count,
            returned = result.items.len(),
            "issue search finished"
        );

        Ok(result.items)
    }

    async fn get_pull_request(&self, owner: &str, repo: &str, number: u64) -> Result<PullRequest> {
        let number = number.to_string();
        let url = self.endpoint(&["repos", owner, repo, "pulls", &number])?;

        let response = self.make_request(url, &[]).await?;
        let pr: PullRequest = response.json().await?;
        Ok(pr)
    }

    fn base_path(&self) -> Vec<String> {
        base_path_segments(&self.api_url)
    }
}
