use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrsError {
    #[error("No access token in env | {0}")]
    MissingToken(&'static str),

    #[error("usage: prs [PRS_USERNAME]")]
    Usage,

    #[error("Could not fetch issues: {0}")]
    SearchFailed(#[source] Box<PrsError>),

    #[error("GitHub API error: {0}")]
    ApiError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Malformed issue URL: {0}")]
    MalformedIssueUrl(String),

    #[error("Invalid API URL: {0}")]
    InvalidApiUrl(#[from] url::ParseError),

    #[error("API URL cannot be used as a base: {0}")]
    UnsupportedApiUrl(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PrsError {
    /// Errors caused by missing or inconsistent input rather than the remote service.
    pub fn is_config_error(&self) -> bool {
        matches!(self, PrsError::MissingToken(_) | PrsError::Usage)
    }
}

pub type Result<T> = std::result::Result<T, PrsError>;
