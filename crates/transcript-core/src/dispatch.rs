//! Per-file-type rendering dispatch.
//!
//! Each [`FileKind`] has a [`RenderStrategy`] that knows how to fetch and
//! render the file (`view`) and which files a save should produce
//! (`download`). [`ContentDispatcher`] classifies a path, runs the matching
//! strategy and turns any failure into a viewer message, so the viewer stays
//! usable after a bad fetch or a malformed file.
//!
//! # Examples
//!
//! ```ignore
//! let dispatcher = ContentDispatcher::new();
//! let ticket = viewer.begin(&path);
//! let content = dispatcher.view(&path, &source).await;
//! viewer.complete(&ticket, content);
//! ```

use crate::artifacts::{file_name, sibling_text_mapping};
use crate::classify::{classify, FileKind};
use crate::error::ViewerError;
use crate::formats::log::log_table;
use crate::formats::mapping::{chunk_table, text_mapping_table};
use crate::formats::subtitle::subtitle_table;
use crate::formats::{
    join_chunks, parse_chunk_mapping, parse_log, parse_request, parse_subtitles,
    parse_text_mapping,
};
use crate::source::ContentSource;
use crate::viewer::ViewerContent;
use tracing::{debug, error, warn};

/// A file the user asked to save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    /// Data-root-relative path of the artifact
    pub path: String,
    /// Suggested file name for the save
    pub file_name: String,
}

impl DownloadTarget {
    pub fn for_path(path: &str) -> Self {
        Self {
            path: path.to_string(),
            file_name: file_name(path).to_string(),
        }
    }
}

/// Rendering capability for one file kind.
#[async_trait::async_trait(?Send)]
pub trait RenderStrategy {
    fn kind(&self) -> FileKind;

    /// Message shown in the viewer when `view` fails.
    fn error_message(&self) -> &'static str;

    /// Fetches `path` and renders it.
    async fn view(
        &self,
        path: &str,
        source: &dyn ContentSource,
    ) -> Result<ViewerContent, ViewerError>;

    /// Files to save for `path`. Most kinds save just the file itself.
    fn download(&self, path: &str) -> Vec<DownloadTarget> {
        vec![DownloadTarget::for_path(path)]
    }
}

struct LogStrategy;

#[async_trait::async_trait(?Send)]
impl RenderStrategy for LogStrategy {
    fn kind(&self) -> FileKind {
        FileKind::Log
    }

    fn error_message(&self) -> &'static str {
        "⚠️ Error loading log"
    }

    async fn view(
        &self,
        path: &str,
        source: &dyn ContentSource,
    ) -> Result<ViewerContent, ViewerError> {
        let text = source.fetch_text(path).await?;
        Ok(ViewerContent::Table(log_table(&parse_log(&text))))
    }
}

struct RequestMetadataStrategy;

#[async_trait::async_trait(?Send)]
impl RenderStrategy for RequestMetadataStrategy {
    fn kind(&self) -> FileKind {
        FileKind::RequestMetadata
    }

    fn error_message(&self) -> &'static str {
        "⚠️ Error loading request metadata"
    }

    async fn view(
        &self,
        path: &str,
        source: &dyn ContentSource,
    ) -> Result<ViewerContent, ViewerError> {
        let text = source.fetch_text(path).await?;
        Ok(ViewerContent::Request(parse_request(&text)?.to_view()))
    }
}

struct ChunkMappingStrategy;

#[async_trait::async_trait(?Send)]
impl RenderStrategy for ChunkMappingStrategy {
    fn kind(&self) -> FileKind {
        FileKind::ChunkMapping
    }

    fn error_message(&self) -> &'static str {
        "⚠️ Error loading mapping"
    }

    async fn view(
        &self,
        path: &str,
        source: &dyn ContentSource,
    ) -> Result<ViewerContent, ViewerError> {
        let chunks = parse_chunk_mapping(&source.fetch_text(path).await?)?;

        // The transcriber writes text_mapping.json last; until then show chunks unmatched
        let text_path = sibling_text_mapping(path);
        let texts = match source.fetch_text(&text_path).await {
            Ok(text) => parse_text_mapping(&text).unwrap_or_else(|e| {
                warn!("Ignoring unreadable {}: {}", text_path, e);
                Vec::new()
            }),
            Err(e) => {
                debug!("No text mapping at {}: {}", text_path, e);
                Vec::new()
            }
        };

        Ok(ViewerContent::Table(chunk_table(&join_chunks(
            &chunks, &texts,
        ))))
    }

    fn download(&self, path: &str) -> Vec<DownloadTarget> {
        vec![
            DownloadTarget::for_path(path),
            DownloadTarget::for_path(&sibling_text_mapping(path)),
        ]
    }
}

struct TextMappingStrategy;

#[async_trait::async_trait(?Send)]
impl RenderStrategy for TextMappingStrategy {
    fn kind(&self) -> FileKind {
        FileKind::TextMapping
    }

    fn error_message(&self) -> &'static str {
        "⚠️ Invalid JSON"
    }

    async fn view(
        &self,
        path: &str,
        source: &dyn ContentSource,
    ) -> Result<ViewerContent, ViewerError> {
        let entries = parse_text_mapping(&source.fetch_text(path).await?)?;
        Ok(ViewerContent::Table(text_mapping_table(&entries)))
    }
}

struct SubtitleStrategy;

#[async_trait::async_trait(?Send)]
impl RenderStrategy for SubtitleStrategy {
    fn kind(&self) -> FileKind {
        FileKind::Subtitle
    }

    fn error_message(&self) -> &'static str {
        "⚠️ Error loading SRT"
    }

    async fn view(
        &self,
        path: &str,
        source: &dyn ContentSource,
    ) -> Result<ViewerContent, ViewerError> {
        let cues = parse_subtitles(&source.fetch_text(path).await?)?;
        Ok(ViewerContent::Table(subtitle_table(&cues)))
    }
}

struct RawTextStrategy;

#[async_trait::async_trait(?Send)]
impl RenderStrategy for RawTextStrategy {
    fn kind(&self) -> FileKind {
        FileKind::Default
    }

    fn error_message(&self) -> &'static str {
        "⚠️ Error loading file"
    }

    async fn view(
        &self,
        path: &str,
        source: &dyn ContentSource,
    ) -> Result<ViewerContent, ViewerError> {
        Ok(ViewerContent::Text(source.fetch_text(path).await?))
    }
}

/// Returns the strategy registered for a file kind.
pub fn strategy_for(kind: FileKind) -> &'static dyn RenderStrategy {
    match kind {
        FileKind::Log => &LogStrategy,
        FileKind::RequestMetadata => &RequestMetadataStrategy,
        FileKind::ChunkMapping => &ChunkMappingStrategy,
        FileKind::TextMapping => &TextMappingStrategy,
        FileKind::Subtitle => &SubtitleStrategy,
        FileKind::Default => &RawTextStrategy,
    }
}

/// Classifies paths and runs the matching strategy.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContentDispatcher;

impl ContentDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Strategy that handles `path`.
    pub fn strategy(&self, path: &str) -> &'static dyn RenderStrategy {
        strategy_for(classify(path))
    }

    /// Fetches and renders `path`. Never fails: errors become
    /// [`ViewerContent::Error`] and are logged.
    pub async fn view(&self, path: &str, source: &dyn ContentSource) -> ViewerContent {
        let strategy = self.strategy(path);
        debug!("Viewing {} as {:?}", path, strategy.kind());

        match strategy.view(path, source).await {
            Ok(content) => content,
            Err(e) => {
                error!("Failed to render {}: {}", path, e);
                ViewerContent::Error(strategy.error_message().to_string())
            }
        }
    }

    /// Files to save when the user downloads `path`.
    pub fn download(&self, path: &str) -> Vec<DownloadTarget> {
        self.strategy(path).download(path)
    }
}
