//! Artifact retrieval over HTTP.
//!
//! Wraps reqwest, which works on both native and WASM platforms (on WASM it
//! uses the browser `fetch()` API internally).

use once_cell::sync::Lazy;
use transcript_core::endpoints::Endpoints;
use transcript_core::{ContentSource, ViewerError};

/// Shared HTTP client; reqwest pools connections internally.
#[cfg(not(target_arch = "wasm32"))]
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent("TranscriptBrowser/0.1.0")
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("Failed to build HTTP client")
});

#[cfg(target_arch = "wasm32")]
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Reads artifacts through `GET /files/content?path=…`.
#[derive(Debug, Clone)]
pub struct HttpContentSource {
    endpoints: Endpoints,
}

impl HttpContentSource {
    pub fn new(base_url: &str) -> Result<Self, ViewerError> {
        Ok(Self {
            endpoints: Endpoints::new(base_url)?,
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

#[async_trait::async_trait(?Send)]
impl ContentSource for HttpContentSource {
    async fn fetch_text(&self, path: &str) -> Result<String, ViewerError> {
        let url = self.endpoints.content_url(path);

        let response = HTTP_CLIENT
            .get(url)
            .send()
            .await
            .map_err(|e| ViewerError::NetworkFailure(format!("Failed to fetch {}: {}", path, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ViewerError::NetworkFailure(format!(
                "HTTP {} fetching {}",
                status.as_u16(),
                path
            )));
        }

        response.text().await.map_err(|e| {
            ViewerError::NetworkFailure(format!("Failed to read response body for {}: {}", path, e))
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            HttpContentSource::new("not a url"),
            Err(ViewerError::NetworkFailure(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_failure() {
        // Port 9 (discard) on localhost is not expected to serve HTTP
        let source = HttpContentSource::new("http://127.0.0.1:9").unwrap();
        let result = source.fetch_text("job/job.log").await;
        assert!(matches!(result, Err(ViewerError::NetworkFailure(_))));
    }
}
