//! File-type classification.
//!
//! Picks the render strategy for a path by its suffix. Rules are checked in
//! priority order and the first match wins, so `request.json` is never
//! mistaken for a generic file and `.LOG` still counts as a log.

/// Closed set of rendering strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Log,
    RequestMetadata,
    ChunkMapping,
    TextMapping,
    Subtitle,
    /// Raw text, shown verbatim
    Default,
}

/// Classifies a path into the strategy that renders it.
pub fn classify(path: &str) -> FileKind {
    if ends_with_ignore_case(path, ".log") {
        FileKind::Log
    } else if path.ends_with("request.json") {
        FileKind::RequestMetadata
    } else if path.ends_with("chunks_mapping.json") {
        FileKind::ChunkMapping
    } else if path.ends_with("text_mapping.json") {
        FileKind::TextMapping
    } else if ends_with_ignore_case(path, ".srt") {
        FileKind::Subtitle
    } else {
        FileKind::Default
    }
}

fn ends_with_ignore_case(path: &str, suffix: &str) -> bool {
    let (path, suffix) = (path.as_bytes(), suffix.as_bytes());
    path.len() >= suffix.len() && path[path.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}
