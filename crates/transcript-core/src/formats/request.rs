//! `request.json` job metadata.
//!
//! Written by the backend when a job is submitted and updated as each
//! pipeline stage completes:
//!
//! ```json
//! {
//!   "audio_filename": "meeting.mp3",
//!   "lang_key": "en",
//!   "segments": [{"start": "00:00:00", "end": "00:10:00"}],
//!   "sent_time": "2024-05-01T12:00:00.000000",
//!   "tasks": { "converterCompleted": "2024-05-01T12:00:05", "chunkerCompleted": null }
//! }
//! ```

use super::Table;
use crate::config::{
    task_display_name, TASK_DONE_GLYPH, TASK_PENDING_GLYPH, TASK_PENDING_LABEL,
};
use crate::error::ViewerError;
use crate::formatting::format_local_timestamp;
use indexmap::IndexMap;
use serde::Deserialize;

/// A user-requested time range, as submitted with the upload.
///
/// Either bound may be blank: the chunker reads a blank start as the
/// beginning of the file and a blank end as its end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Segment {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

/// Parsed `request.json`.
///
/// Missing scalar fields default to empty strings; only a document that is
/// not a JSON object (or has wrongly typed fields) is a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RequestMetadata {
    #[serde(default)]
    pub audio_filename: String,
    #[serde(default)]
    pub lang_key: String,
    #[serde(default)]
    pub sent_time: String,
    /// Requested ranges, one per segment
    #[serde(default)]
    pub segments: Vec<Segment>,
    /// Task id to completion time, in document order
    #[serde(default)]
    pub tasks: IndexMap<String, Option<String>>,
}

/// Parses `request.json` content.
pub fn parse_request(text: &str) -> Result<RequestMetadata, ViewerError> {
    Ok(serde_json::from_str(text)?)
}

/// Rendered request metadata: a field list followed by the task table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestView {
    pub fields: Vec<(String, String)>,
    pub tasks: Table,
}

impl RequestMetadata {
    pub fn to_view(&self) -> RequestView {
        let fields = vec![
            ("Audio Filename".to_string(), self.audio_filename.clone()),
            ("Language".to_string(), self.lang_key.clone()),
            ("Sent Time".to_string(), format_local_timestamp(&self.sent_time)),
        ];

        let mut tasks = Table::with_headers(&["Task", "Status", "Timestamp"]);
        for (key, stamp) in &self.tasks {
            // An empty stamp counts as not yet completed
            let (glyph, when) = match stamp.as_deref() {
                Some(stamp) if !stamp.is_empty() => (TASK_DONE_GLYPH, format_local_timestamp(stamp)),
                _ => (TASK_PENDING_GLYPH, TASK_PENDING_LABEL.to_string()),
            };
            tasks.push_row([task_display_name(key).to_string(), glyph.to_string(), when]);
        }

        RequestView { fields, tasks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "audio_filename": "meeting.mp3",
        "lang_key": "en",
        "sent_time": "2024-05-01T12:00:00.000000",
        "segments": [
            {"start": "00:00:00", "end": "00:01:00"},
            {"start": "00:01:00", "end": ""}
        ],
        "tasks": {
            "converterCompleted": "2024-05-01T12:00:05",
            "chunkerCompleted": null,
            "diarizerCompleted": null
        }
    }"#;

    #[test]
    fn test_parse_full_document() {
        let meta = parse_request(SAMPLE).unwrap();
        assert_eq!(meta.audio_filename, "meeting.mp3");
        assert_eq!(meta.segments.len(), 2);
        assert_eq!(
            meta.segments[1],
            Segment {
                start: "00:01:00".to_string(),
                end: String::new()
            }
        );
        assert_eq!(meta.tasks.len(), 3);
    }

    #[test]
    fn test_view_preserves_task_order_and_names() {
        let view = parse_request(SAMPLE).unwrap().to_view();
        assert_eq!(view.fields[0], ("Audio Filename".to_string(), "meeting.mp3".to_string()));
        assert_eq!(view.fields[1], ("Language".to_string(), "en".to_string()));
        assert_eq!(view.fields[2].1, "2024-05-01 12:00:00");

        assert_eq!(view.tasks.headers, vec!["Task", "Status", "Timestamp"]);
        assert_eq!(view.tasks.rows[0], vec!["Conversion", "✅", "2024-05-01 12:00:05"]);
        assert_eq!(view.tasks.rows[1], vec!["Chunking", "⌛", "Pending"]);
        assert_eq!(view.tasks.rows[2][0], "diarizerCompleted");
    }

    #[test]
    fn test_missing_fields_default() {
        let meta = parse_request("{}").unwrap();
        assert!(meta.tasks.is_empty());
        assert!(meta.audio_filename.is_empty());
    }

    #[test]
    fn test_empty_stamp_is_pending() {
        let meta = parse_request(
            r#"{"tasks": {"converterCompleted": "", "chunkerCompleted": null}}"#,
        )
        .unwrap();
        let view = meta.to_view();
        assert_eq!(view.tasks.rows[0], vec!["Conversion", "⌛", "Pending"]);
        assert_eq!(view.tasks.rows[1], vec!["Chunking", "⌛", "Pending"]);
    }

    #[test]
    fn test_segments_without_bounds_default_blank() {
        let meta = parse_request(r#"{"segments": [{}, {"start": "00:05:00"}]}"#).unwrap();
        assert_eq!(meta.segments.len(), 2);
        assert_eq!(meta.segments[0], Segment::default());
        assert_eq!(meta.segments[1].start, "00:05:00");
    }

    #[test]
    fn test_non_object_is_parse_failure() {
        assert!(matches!(
            parse_request("[1, 2]"),
            Err(ViewerError::ParseFailure(_))
        ));
        assert!(parse_request("not json").is_err());
    }
}
