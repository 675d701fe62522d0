use crate::cli::Cli;
use crate::config::Config;
use crate::error::{PrsError, Result};
use crate::github::GitHubApi;
use crate::listing::list_pull_requests;
use clap::Parser;
use colored::*;
use std::ffi::OsString;
use std::io::Write;
use tracing::debug;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Runs one invocation and returns the process exit code.
///
/// `lookup` reads the token and username variables, `connect` builds the API
/// handle once the configuration is valid. Configuration errors and a failed
/// search exit with [`EXIT_FAILURE`]; per-item failures do not change the code.
pub async fn run<I, T, L, C, A, O, E>(
    args: I,
    lookup: L,
    connect: C,
    out: &mut O,
    err: &mut E,
) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    L: Fn(&str) -> Option<String>,
    C: FnOnce(&Config) -> Result<A>,
    A: GitHubApi,
    O: Write,
    E: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and are not failures
            let rendered = e.render();
            return if e.use_stderr() {
                let _ = write!(err, "{}", rendered);
                EXIT_FAILURE
            } else {
                let _ = write!(out, "{}", rendered);
                EXIT_SUCCESS
            };
        }
    };

    let config = match Config::from_cli(cli, lookup) {
        Ok(config) => config,
        Err(e) => return report(err, &e),
    };
    debug!(?config, "configuration resolved");

    let api = match connect(&config) {
        Ok(api) => api,
        Err(e) => return report(err, &e),
    };

    match list_pull_requests(&api, &config.credentials.username, out, err).await {
        Ok(summary) => {
            debug!(
                listed = summary.listed,
                fetch_failures = summary.fetch_failures,
                skipped = summary.skipped,
                "done"
            );
            EXIT_SUCCESS
        }
        Err(e) => report(err, &e),
    }
}

/// Writes `e` for the user and returns the failure code. Credential problems
/// are printed bare, everything else gets an `error:` prefix.
pub fn report<E: Write>(err: &mut E, e: &PrsError) -> u8 {
    let _ = if e.is_config_error() {
        writeln!(err, "{}", e)
    } else {
        writeln!(err, "{} {}", "error:".red().bold(), e)
    };
    EXIT_FAILURE
}
