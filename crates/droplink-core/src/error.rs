//! Error types for droplink submissions

use thiserror::Error;

/// Main error type for submission operations.
///
/// Display strings double as the user-facing failure messages, so the
/// wording here is load-bearing: the UI renders `err.to_string()` verbatim.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// Neither a URL nor a file was provided
    #[error("Please provide a URL or choose a file.")]
    NoInput,

    /// Both a URL and a file were provided (unreachable through the
    /// canonical mutators; guards callers that bypass them)
    #[error("Provide only one: URL or File, not both.")]
    ConflictingInput,

    /// Server answered with an explicit error message
    #[error("{0}")]
    Rejected(String),

    /// Server answered outside the 2xx range without a usable message
    #[error("HTTP {0}")]
    Status(u16),

    /// Network-level failure while sending or receiving
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not the expected JSON shape
    #[error("{0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// Result type alias using SubmitError
pub type SubmitResult<T> = Result<T, SubmitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_input_display() {
        assert_eq!(
            SubmitError::NoInput.to_string(),
            "Please provide a URL or choose a file."
        );
    }

    #[test]
    fn test_conflicting_input_display() {
        assert_eq!(
            SubmitError::ConflictingInput.to_string(),
            "Provide only one: URL or File, not both."
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(SubmitError::Status(500).to_string(), "HTTP 500");
    }

    #[test]
    fn test_rejected_is_verbatim() {
        let err = SubmitError::Rejected("duplicate".to_string());
        assert_eq!(err.to_string(), "duplicate");
    }

    #[test]
    fn test_from_json_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: SubmitError = parse_err.into();
        assert!(matches!(err, SubmitError::MalformedResponse(_)));
        assert!(!err.to_string().is_empty());
    }
}
