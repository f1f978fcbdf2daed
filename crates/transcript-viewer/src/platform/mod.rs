//! Platform-specific artifact access.
//!
//! - **Web**: artifacts come from the backend over HTTP, the listing from
//!   the page the app is mounted in, and downloads go through the backend's
//!   `/download` endpoint.
//! - **Desktop**: everything is read from the data directory, and downloads
//!   are copies saved through a native dialog.
//!
//! Components only see [`PlatformBackend`].

pub mod http;
#[cfg(not(target_arch = "wasm32"))]
pub mod local;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use http::HttpContentSource;
#[cfg(not(target_arch = "wasm32"))]
pub use local::LocalContentSource;

use crate::config::{resolve_backend, BackendConfig};
use crate::error::PlatformError;
use transcript_core::{BatchRow, ContentSource, DownloadTarget, ViewerError};

#[cfg(target_arch = "wasm32")]
type PlatformContentSource = HttpContentSource;

#[cfg(not(target_arch = "wasm32"))]
type PlatformContentSource = LocalContentSource;

/// The content source, listing and downloads of the running platform.
#[derive(Debug, Clone)]
pub struct PlatformBackend {
    source: PlatformContentSource,
}

impl PlatformBackend {
    /// Opens the backend resolved from the platform configuration.
    pub fn open() -> Result<Self, PlatformError> {
        Self::from_config(resolve_backend()?)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_config(config: BackendConfig) -> Result<Self, PlatformError> {
        match config {
            BackendConfig::Remote { base_url } => Ok(Self {
                source: HttpContentSource::new(&base_url)?,
            }),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_config(config: BackendConfig) -> Result<Self, PlatformError> {
        match config {
            BackendConfig::Local { data_dir } => Ok(Self {
                source: LocalContentSource::new(data_dir),
            }),
            BackendConfig::Remote { base_url } => Err(PlatformError::Config(format!(
                "Remote backends are browsed from the web build ({})",
                base_url
            ))),
        }
    }

    /// Batches to list, newest first.
    #[cfg(target_arch = "wasm32")]
    pub async fn load_batches(&self) -> Result<Vec<BatchRow>, PlatformError> {
        web::read_batch_rows()
    }

    /// Batches to list, newest first.
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn load_batches(&self) -> Result<Vec<BatchRow>, PlatformError> {
        self.source.scan_batches().await
    }

    /// Saves the given files without leaving the page.
    #[cfg(target_arch = "wasm32")]
    pub async fn save(&self, targets: Vec<DownloadTarget>) -> Result<(), PlatformError> {
        web::save_targets(self.source.endpoints(), &targets)
    }

    /// Saves a copy of each file to a location picked in a native dialog.
    ///
    /// Cancelling the dialog skips that file. Missing files (such as a text
    /// mapping not yet written) fail the save.
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn save(&self, targets: Vec<DownloadTarget>) -> Result<(), PlatformError> {
        use dioxus::logger::tracing::info;
        use rfd::AsyncFileDialog;

        for target in targets {
            let bytes = self.source.read_bytes(&target.path).await?;

            let Some(handle) = AsyncFileDialog::new()
                .set_title("Save artifact")
                .set_file_name(&target.file_name)
                .save_file()
                .await
            else {
                info!("Save of {} cancelled", target.path);
                continue;
            };

            tokio::fs::write(handle.path(), bytes).await.map_err(|e| {
                PlatformError::Download(format!("{}: {}", handle.path().display(), e))
            })?;
            info!("Saved {} to {}", target.path, handle.path().display());
        }

        Ok(())
    }
}

#[async_trait::async_trait(?Send)]
impl ContentSource for PlatformBackend {
    async fn fetch_text(&self, path: &str) -> Result<String, ViewerError> {
        self.source.fetch_text(path).await
    }
}
