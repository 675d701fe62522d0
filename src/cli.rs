use clap::Parser;

use crate::config::{API_URL_ENV, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, TIMEOUT_ENV};

#[derive(Parser, Debug)]
#[command(name = "prs")]
#[command(about = "Lists open GitHub pull requests involving a user")]
#[command(
    long_about = "Lists open GitHub pull requests involving a user, one line per pull request.\n\n\
    The access token is read from PRS_GITHUB_ACCESS_TOKEN. The username is read from \
    PRS_USERNAME unless given on the command line."
)]
#[command(version)]
pub struct Cli {
    /// GitHub username, overrides PRS_USERNAME
    pub username: Option<String>,

    /// GitHub API base URL
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(
        long = "timeout",
        env = TIMEOUT_ENV,
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,
}
