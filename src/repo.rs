use crate::error::{PrsError, Result};
use std::fmt;
use url::Url;

/// Owning account and name of a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Extracts the repository from an issue URL of a host-root API,
/// `https://<host>/repos/<owner>/<repo>/issues/<number>`.
pub fn extract_repo(issue_url: &str) -> Result<RepoRef> {
    extract_repo_under(issue_url, &[])
}

/// Extracts the repository from an issue URL of an API mounted under
/// `base_path`, e.g. `["api", "v3"]` for `https://<host>/api/v3`.
///
/// After the base path the URL must continue with `repos/<owner>/<repo>`.
/// When the issue URL does not start with the base path it is read as a
/// host-root URL.
pub fn extract_repo_under(issue_url: &str, base_path: &[String]) -> Result<RepoRef> {
    let malformed = || PrsError::MalformedIssueUrl(issue_url.to_string());

    let url = Url::parse(issue_url).map_err(|_| malformed())?;
    let segments: Vec<&str> = url.path_segments().ok_or_else(malformed)?.collect();

    let prefixed = !base_path.is_empty()
        && segments.len() > base_path.len()
        && segments.iter().zip(base_path).all(|(s, b)| *s == b.as_str());
    let rest = if prefixed {
        &segments[base_path.len()..]
    } else {
        &segments[..]
    };

    match rest {
        ["repos", owner, name, ..] if !owner.is_empty() && !name.is_empty() => Ok(RepoRef {
            owner: owner.to_string(),
            name: name.to_string(),
        }),
        _ => Err(malformed()),
    }
}

/// Non-empty path segments of an API base URL.
pub fn base_path_segments(api_url: &Url) -> Vec<String> {
    api_url
        .path_segments()
        .map(|segments| {
            segments
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
