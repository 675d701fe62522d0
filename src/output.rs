use crate::repo::RepoRef;
use crate::types::{Issue, PullRequest};
use std::io::{self, Write};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats the summary line for one pull request.
///
/// `<owner>/<repo> | <title> | * <files> + <adds> - <dels> | C <comments> | <date> | <url>`
///
/// The title is passed through as-is.
pub fn format_line(repo: &RepoRef, issue: &Issue, pr: &PullRequest) -> String {
    format!(
        "{} | {} | * {} + {} - {} | C {} | {} | {}",
        repo,
        issue.title,
        pr.changed_files,
        pr.additions,
        pr.deletions,
        pr.comments,
        issue.created_at.format(DATE_FORMAT),
        issue.url
    )
}

pub fn write_line<W: Write>(
    w: &mut W,
    repo: &RepoRef,
    issue: &Issue,
    pr: &PullRequest,
) -> io::Result<()> {
    writeln!(w, "{}", format_line(repo, issue, pr))
}
