//! Error types for transcript-core.
//!
//! Every failure the viewer can hit falls into one of three classes. None of
//! them is fatal: the dispatcher turns each into a short message in the
//! viewer and logs the detail.

use thiserror::Error;

/// Errors that can occur while loading or rendering an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewerError {
    /// Fetch was rejected or returned a non-success status
    #[error("Network failure: {0}")]
    NetworkFailure(String),
    /// Content does not match the structure expected for its file type
    #[error("Parse failure: {0}")]
    ParseFailure(String),
    /// Batch metadata (segment count) could not be parsed
    #[error("Malformed metadata: {0}")]
    MalformedMetadata(String),
}

impl From<serde_json::Error> for ViewerError {
    fn from(err: serde_json::Error) -> Self {
        ViewerError::ParseFailure(err.to_string())
    }
}

/// Convert from ViewerError to String for display in UI status fields
impl From<ViewerError> for String {
    fn from(err: ViewerError) -> String {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_becomes_parse_failure() {
        let err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        assert!(matches!(
            ViewerError::from(err),
            ViewerError::ParseFailure(_)
        ));
    }

    #[test]
    fn test_error_display() {
        let err = ViewerError::NetworkFailure("HTTP 404".to_string());
        assert_eq!(String::from(err), "Network failure: HTTP 404");
    }
}
