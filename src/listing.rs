use crate::error::{PrsError, Result};
use crate::github::GitHubApi;
use crate::output::write_line;
use crate::repo::extract_repo_under;
use crate::types::PullRequest;
use std::io::{ErrorKind, Write};
use tracing::{debug, info_span, Instrument};

/// Counts collected over one listing run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ListingSummary {
    /// Lines written to the output.
    pub listed: usize,
    /// Items printed with zeroed stats because the detail fetch failed.
    pub fetch_failures: usize,
    /// Items dropped because their URL did not name a repository.
    pub skipped: usize,
}

/// Searches for open pull requests involving `username` and writes one line
/// per hit to `out`, in search order.
///
/// A failed search is fatal and nothing is written. A failed detail fetch is
/// reported on `err` and the line is still written with zeroed stats. A closed
/// `out` ends the listing early without an error.
pub async fn list_pull_requests<A, O, E>(
    api: &A,
    username: &str,
    out: &mut O,
    err: &mut E,
) -> Result<ListingSummary>
where
    A: GitHubApi + ?Sized,
    O: Write,
    E: Write,
{
    let issues = api
        .search_issues(username)
        .instrument(info_span!("search", user = %username))
        .await
        .map_err(|e| PrsError::SearchFailed(Box::new(e)))?;

    debug!(count = issues.len(), "listing pull requests");

    let base_path = api.base_path();
    let mut summary = ListingSummary::default();

    for issue in &issues {
        let repo = match extract_repo_under(&issue.url, &base_path) {
            Ok(repo) => repo,
            Err(e) => {
                writeln!(err, "Skipping issue #{}: {}", issue.number, e)?;
                summary.skipped += 1;
                continue;
            }
        };

        let pr = match api
            .get_pull_request(&repo.owner, &repo.name, issue.number)
            .await
        {
            Ok(pr) => pr,
            Err(e) => {
                debug!(repo = %repo, number = issue.number, error = ?e, "pull request fetch failed");
                writeln!(err, "Could not fetch pull request for issue: {}", e)?;
                summary.fetch_failures += 1;
                PullRequest::default()
            }
        };

        match write_line(out, &repo, issue, &pr) {
            Ok(()) => summary.listed += 1,
            // Reader went away, e.g. `prs | head -1`
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                debug!("output closed, stopping");
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(summary)
}
