use crate::cli::Cli;
use crate::error::{PrsError, Result};
use std::fmt;
use std::time::Duration;
use url::Url;

pub const TOKEN_ENV: &str = "PRS_GITHUB_ACCESS_TOKEN";
pub const USERNAME_ENV: &str = "PRS_USERNAME";
pub const API_URL_ENV: &str = "PRS_GITHUB_API_URL";
pub const TIMEOUT_ENV: &str = "PRS_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Access token and the user whose pull requests are listed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub username: String,
}

impl Credentials {
    /// Resolves credentials from already-read inputs.
    ///
    /// The token must be present. When the username variable is empty the
    /// command-line argument is mandatory; otherwise the argument, if given,
    /// overrides the variable. Empty strings count as absent.
    pub fn resolve(
        token: Option<String>,
        env_username: Option<String>,
        arg_username: Option<String>,
    ) -> Result<Self> {
        let token = non_empty(token).ok_or(PrsError::MissingToken(TOKEN_ENV))?;

        let username = match (non_empty(env_username), non_empty(arg_username)) {
            (_, Some(arg)) => arg,
            (Some(env), None) => env,
            (None, None) => return Err(PrsError::Usage),
        };

        Ok(Credentials { token, username })
    }

    /// Reads the token and username variables through `lookup`, which is
    /// `std::env::var` in the binary.
    pub fn from_lookup<L>(lookup: L, arg_username: Option<String>) -> Result<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        Self::resolve(lookup(TOKEN_ENV), lookup(USERNAME_ENV), arg_username)
    }
}

// Keep the token out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("username", &self.username)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub api_url: Url,
    pub timeout: Duration,
}

impl Config {
    pub fn new(credentials: Credentials, api_url: &str, timeout: Duration) -> Result<Self> {
        let api_url = Url::parse(api_url)?;
        if api_url.cannot_be_a_base() {
            return Err(PrsError::UnsupportedApiUrl(api_url.to_string()));
        }
        Ok(Config {
            credentials,
            api_url,
            timeout,
        })
    }

    /// Builds the run configuration from parsed arguments and the variables
    /// visible through `lookup`.
    pub fn from_cli<L>(cli: Cli, lookup: L) -> Result<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let credentials = Credentials::from_lookup(lookup, cli.username)?;
        Self::new(
            credentials,
            &cli.api_url,
            Duration::from_secs(cli.timeout_secs),
        )
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
