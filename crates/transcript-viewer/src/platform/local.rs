//! Desktop access to the backend's data directory.
//!
//! Serves the same paths the backend would, relative to the data root, and
//! refuses paths that would escape it.

use crate::error::PlatformError;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use transcript_core::listing::batches_from_requests;
use transcript_core::{BatchRow, ContentSource, ViewerError};

#[derive(Debug, Clone)]
pub struct LocalContentSource {
    root: PathBuf,
}

impl LocalContentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Maps a data-root-relative path to a file path inside the root.
    fn resolve(&self, path: &str) -> Result<PathBuf, ViewerError> {
        let relative = Path::new(path);
        let inside_root = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !inside_root {
            return Err(ViewerError::NetworkFailure(format!(
                "Path escapes data directory: {}",
                path
            )));
        }
        Ok(self.root.join(relative))
    }

    /// Reads an artifact's raw bytes (used for saving copies).
    pub async fn read_bytes(&self, path: &str) -> Result<Vec<u8>, ViewerError> {
        let full = self.resolve(path)?;
        fs::read(&full)
            .await
            .map_err(|e| ViewerError::NetworkFailure(format!("Failed to read {}: {}", path, e)))
    }

    /// Lists every job folder that has a `request.json`, newest first.
    pub async fn scan_batches(&self) -> Result<Vec<BatchRow>, PlatformError> {
        let mut entries = fs::read_dir(&self.root).await.map_err(|e| {
            PlatformError::Listing(format!("{}: {}", self.root.display(), e))
        })?;

        let mut requests = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| PlatformError::Listing(e.to_string()))?
        {
            let Ok(folder) = entry.file_name().into_string() else {
                continue;
            };
            let request_path = entry.path().join("request.json");
            if let Ok(content) = fs::read_to_string(&request_path).await {
                requests.push((folder, content));
            }
        }

        Ok(batches_from_requests(requests))
    }
}

#[async_trait::async_trait(?Send)]
impl ContentSource for LocalContentSource {
    async fn fetch_text(&self, path: &str) -> Result<String, ViewerError> {
        let full = self.resolve(path)?;
        fs::read_to_string(&full)
            .await
            .map_err(|e| ViewerError::NetworkFailure(format!("Failed to read {}: {}", path, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "transcript-viewer-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_rejects_escaping_paths() {
        let source = LocalContentSource::new("/data");
        assert!(source.resolve("../etc/passwd").is_err());
        assert!(source.resolve("/etc/passwd").is_err());
        assert!(source.resolve("job/../../x").is_err());
        assert_eq!(
            source.resolve("job/job.log").unwrap(),
            PathBuf::from("/data/job/job.log")
        );
    }

    #[tokio::test]
    async fn test_fetch_and_scan() {
        let root = temp_root("scan");
        std::fs::create_dir_all(root.join("job_a")).unwrap();
        std::fs::create_dir_all(root.join("job_b")).unwrap();
        std::fs::create_dir_all(root.join("not_a_job")).unwrap();
        std::fs::write(
            root.join("job_a/request.json"),
            r#"{"audio_filename": "a.mp3", "lang_key": "en",
                "segments": [{"start": "00:00:00", "end": "00:01:00"}, {"start": "00:01:00", "end": ""}],
                "sent_time": "2024-01-01T00:00:00", "tasks": {"converterCompleted": null}}"#,
        )
        .unwrap();
        std::fs::write(
            root.join("job_b/request.json"),
            r#"{"sent_time": "2024-02-01T00:00:00"}"#,
        )
        .unwrap();
        std::fs::write(root.join("job_a/job_a.log"), "hello").unwrap();

        let source = LocalContentSource::new(&root);
        assert_eq!(source.fetch_text("job_a/job_a.log").await.unwrap(), "hello");
        assert!(source.fetch_text("job_a/missing.log").await.is_err());

        let batches = source.scan_batches().await.unwrap();
        assert_eq!(
            batches,
            vec![BatchRow::new("job_b", 1), BatchRow::new("job_a", 2)]
        );

        let _ = std::fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn test_missing_root_is_listing_error() {
        let source = LocalContentSource::new("/definitely/not/here");
        assert!(matches!(
            source.scan_batches().await,
            Err(PlatformError::Listing(_))
        ));
    }
}
