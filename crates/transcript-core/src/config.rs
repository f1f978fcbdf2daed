//! Shared constants.
//!
//! Endpoint paths, display labels and viewer messages used by every frontend.

// =============================================================================
// Backend endpoints
// =============================================================================

/// Raw artifact content, queried as `?path=<path>`.
pub const CONTENT_ENDPOINT: &str = "/files/content";

/// File-save endpoint; the artifact path is appended as one encoded segment.
pub const DOWNLOAD_ENDPOINT: &str = "download";

// =============================================================================
// Request metadata
// =============================================================================

/// Display names for the pipeline stages recorded in `request.json`.
///
/// Keys not listed here are shown verbatim.
pub const TASK_DISPLAY_NAMES: &[(&str, &str)] = &[
    ("converterCompleted", "Conversion"),
    ("chunkerCompleted", "Chunking"),
    ("transcriberCompleted", "Transcription"),
    ("assemblerCompleted", "Assembling"),
    ("cleanerCompleted", "Cleaning"),
];

pub const TASK_DONE_GLYPH: &str = "✅";
pub const TASK_PENDING_GLYPH: &str = "⌛";
pub const TASK_PENDING_LABEL: &str = "Pending";

/// Looks up the human-readable name of a pipeline task.
pub fn task_display_name(key: &str) -> &str {
    TASK_DISPLAY_NAMES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, name)| *name)
        .unwrap_or(key)
}

// =============================================================================
// Viewer
// =============================================================================

/// Shown in the text column of a chunk with no matching transcript.
pub const UNMATCHED_PLACEHOLDER: &str = "—";

/// Format used for timestamps rendered in local time.
pub const LOCAL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
