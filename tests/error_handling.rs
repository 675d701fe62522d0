use prs::error::{PrsError, Result};
use std::error::Error;

#[test]
fn test_error_display() {
    let error = PrsError::NotFound("acme/widgets#7".to_string());
    assert_eq!(format!("{}", error), "Resource not found: acme/widgets#7");

    let error = PrsError::ApiError("API failed".to_string());
    assert_eq!(format!("{}", error), "GitHub API error: API failed");

    let error = PrsError::MalformedIssueUrl("not-a-url".to_string());
    assert_eq!(format!("{}", error), "Malformed issue URL: not-a-url");

    let error = PrsError::SearchFailed(Box::new(PrsError::ApiError("boom".to_string())));
    assert_eq!(
        format!("{}", error),
        "Could not fetch issues: GitHub API error: boom"
    );
}

#[test]
fn test_error_source() {
    let error = PrsError::NotFound("missing".to_string());
    assert!(error.source().is_none());

    let error = PrsError::SearchFailed(Box::new(PrsError::NotFound("missing".to_string())));
    assert!(error.source().is_some());
}

#[test]
fn test_config_errors() {
    assert!(PrsError::Usage.is_config_error());
    assert!(PrsError::MissingToken("PRS_GITHUB_ACCESS_TOKEN").is_config_error());
    assert!(!PrsError::ApiError("x".to_string()).is_config_error());
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
    let error: PrsError = io_error.into();
    assert!(matches!(error, PrsError::IoError(_)));

    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: PrsError = json_error.into();
    assert!(matches!(error, PrsError::JsonError(_)));
}

#[test]
fn test_result_type() {
    fn returns_error() -> Result<String> {
        Err(PrsError::Usage)
    }

    let result = returns_error();
    assert!(result.is_err());
}
