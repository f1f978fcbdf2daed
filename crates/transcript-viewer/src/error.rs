//! Error types for the viewer application.

use thiserror::Error;
use transcript_core::ViewerError;

/// Errors from platform integration (listing, saving files, configuration).
#[derive(Debug, Clone, Error)]
pub enum PlatformError {
    /// Backend or data directory could not be determined
    #[error("Configuration error: {0}")]
    Config(String),
    /// Job listing could not be read
    #[error("Failed to list batches: {0}")]
    Listing(String),
    /// A file could not be saved
    #[error("Download failed: {0}")]
    Download(String),
    /// Browser API missing (no window or document)
    #[error("Browser API unavailable: {0}")]
    BrowserApiUnavailable(String),
    #[error(transparent)]
    Viewer(#[from] ViewerError),
}

/// Convert from PlatformError to String for display in status fields
impl From<PlatformError> for String {
    fn from(err: PlatformError) -> String {
        err.to_string()
    }
}
