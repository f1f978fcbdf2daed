//! Content retrieval abstraction.
//!
//! Render strategies read artifacts through [`ContentSource`] so the same
//! dispatch logic runs against the backend over HTTP (web), the local data
//! directory (desktop) or a map of fixtures (tests).
//!
//! # Implementations
//!
//! - [`InMemoryContentSource`] - Map-backed source for testing
//! - `HttpContentSource` - `GET /files/content` (in the viewer crate)
//! - `LocalContentSource` - Reads the data directory (in the viewer crate, desktop)

use crate::error::ViewerError;
use std::collections::HashMap;

/// Read access to job artifacts by data-root-relative path.
#[async_trait::async_trait(?Send)]
pub trait ContentSource {
    /// Fetches an artifact as UTF-8 text.
    #[must_use = "Fetch failures should be rendered"]
    async fn fetch_text(&self, path: &str) -> Result<String, ViewerError>;
}

/// In-memory source that serves registered fixtures.
///
/// Unknown paths fail with [`ViewerError::NetworkFailure`], the same way a
/// 404 from the backend does.
#[derive(Debug, Default, Clone)]
pub struct InMemoryContentSource {
    files: HashMap<String, String>,
}

impl InMemoryContentSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a file, replacing any previous content at `path`.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }
}

#[async_trait::async_trait(?Send)]
impl ContentSource for InMemoryContentSource {
    async fn fetch_text(&self, path: &str) -> Result<String, ViewerError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| ViewerError::NetworkFailure(format!("HTTP 404 fetching {}", path)))
    }
}
