//! Parsers for the structured artifacts of a job.
//!
//! Each parser turns raw content into typed rows, and each row type knows
//! how to lay itself out as a [`Table`] for the viewer.
//!
//! - [`log`] - `YYYY-MM-DD HH:MM:SS LEVEL: message` job logs
//! - [`request`] - `request.json` job metadata
//! - [`mapping`] - chunk timing and chunk-to-transcript mappings
//! - [`subtitle`] - SRT subtitle blocks

pub mod log;
pub mod mapping;
pub mod request;
pub mod subtitle;

pub use log::{parse_log, LogRow};
pub use mapping::{
    join_chunks, normalize_slashes, parse_chunk_mapping, parse_text_mapping, ChunkRecord,
    ChunkRow, TextMappingEntry,
};
pub use request::{parse_request, RequestMetadata, RequestView, Segment};
pub use subtitle::{parse_subtitles, SubtitleCue};

/// A rendered table: one header row and any number of body rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates an empty table with the given column headers.
    pub fn with_headers(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a body row.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Splits text into lines on `\n`, dropping a trailing `\r` from each.
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}
