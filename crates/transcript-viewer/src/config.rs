//! Backend resolution.
//!
//! - Web: the backend is the origin the page was served from.
//! - Desktop: artifacts are read from the backend's data directory, found via
//!   `$TRANSCRIPT_DATA_DIR` or the platform data directory.

use crate::error::PlatformError;

/// Environment variable for a custom data directory (desktop)
#[cfg(not(target_arch = "wasm32"))]
pub const DATA_DIR_ENV: &str = "TRANSCRIPT_DATA_DIR";

/// Where artifacts are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendConfig {
    /// Backend HTTP origin, e.g. `http://localhost:6001`
    Remote { base_url: String },
    /// Backend data directory on the local filesystem
    #[cfg(not(target_arch = "wasm32"))]
    Local { data_dir: std::path::PathBuf },
}

/// Resolves the backend for the current platform.
#[cfg(target_arch = "wasm32")]
pub fn resolve_backend() -> Result<BackendConfig, PlatformError> {
    let window = web_sys::window()
        .ok_or_else(|| PlatformError::BrowserApiUnavailable("window".to_string()))?;
    let origin = window
        .location()
        .origin()
        .map_err(|e| PlatformError::Config(format!("Failed to read page origin: {:?}", e)))?;
    Ok(BackendConfig::Remote { base_url: origin })
}

/// Resolves the backend for the current platform.
///
/// Search order:
/// 1. `$TRANSCRIPT_DATA_DIR` environment variable
/// 2. Platform data directory (e.g. `~/.local/share/transcriptbrowser/` on Linux)
#[cfg(not(target_arch = "wasm32"))]
pub fn resolve_backend() -> Result<BackendConfig, PlatformError> {
    resolve_data_dir(std::env::var(DATA_DIR_ENV).ok()).map(|data_dir| BackendConfig::Local { data_dir })
}

#[cfg(not(target_arch = "wasm32"))]
fn resolve_data_dir(custom: Option<String>) -> Result<std::path::PathBuf, PlatformError> {
    use directories::ProjectDirs;

    if let Some(dir) = custom.filter(|d| !d.trim().is_empty()) {
        return Ok(std::path::PathBuf::from(dir));
    }

    ProjectDirs::from("", "", "TranscriptBrowser")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PlatformError::Config("Could not determine data directory".to_string()))
}
