//! Backend URL construction.
//!
//! The backend exposes two endpoints for artifacts:
//!
//! - `GET /files/content?path=<path>` - raw content
//! - `GET /download/<path>` - file-save response, the whole path encoded as
//!   one segment (`/` becomes `%2F`)

use crate::config::{CONTENT_ENDPOINT, DOWNLOAD_ENDPOINT};
use crate::error::ViewerError;
use url::Url;

/// Builds artifact URLs against a backend origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    /// Creates endpoints for a backend origin such as `http://localhost:6001`.
    pub fn new(base: &str) -> Result<Self, ViewerError> {
        let base = Url::parse(base)
            .map_err(|e| ViewerError::NetworkFailure(format!("Invalid backend URL {}: {}", base, e)))?;
        if base.cannot_be_a_base() {
            return Err(ViewerError::NetworkFailure(format!(
                "Backend URL cannot be a base: {}",
                base
            )));
        }
        Ok(Self { base })
    }

    /// URL of the raw content of `path`.
    pub fn content_url(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        url.set_path(CONTENT_ENDPOINT);
        url.set_query(None);
        url.query_pairs_mut().append_pair("path", path);
        url
    }

    /// URL that answers with a file-save response for `path`.
    pub fn download_url(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        // cannot_be_a_base was rejected in `new`, so segments are always available
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.clear().push(DOWNLOAD_ENDPOINT).push(path);
        }
        url
    }
}
