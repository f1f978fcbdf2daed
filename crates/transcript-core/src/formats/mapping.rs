//! Chunk timing and chunk-to-transcript mappings.
//!
//! `chunks_mapping.json` lists the audio chunks cut from a segment with
//! their offsets; `text_mapping.json` (written later by the transcriber, so
//! it may be missing) pairs each chunk file with its transcript file. Paths
//! in the text mapping may use Windows separators.

use super::Table;
use crate::config::UNMATCHED_PLACEHOLDER;
use crate::error::ViewerError;
use crate::formatting::ms_to_hms;
use serde::Deserialize;

/// One entry of `chunks_mapping.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChunkRecord {
    pub start_ms: f64,
    pub end_ms: f64,
    pub chunk_file: String,
}

/// One entry of `text_mapping.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TextMappingEntry {
    pub audio_file: String,
    pub text_file: String,
}

impl TextMappingEntry {
    /// Both paths with `\` replaced by `/`.
    pub fn normalized(&self) -> Self {
        Self {
            audio_file: normalize_slashes(&self.audio_file),
            text_file: normalize_slashes(&self.text_file),
        }
    }
}

/// A chunk joined with its transcript file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkRow {
    pub start: String,
    pub end: String,
    pub audio_file: String,
    pub text_file: Option<String>,
}

pub fn normalize_slashes(path: &str) -> String {
    path.replace('\\', "/")
}

pub fn parse_chunk_mapping(text: &str) -> Result<Vec<ChunkRecord>, ViewerError> {
    Ok(serde_json::from_str(text)?)
}

pub fn parse_text_mapping(text: &str) -> Result<Vec<TextMappingEntry>, ViewerError> {
    Ok(serde_json::from_str(text)?)
}

fn offset_ms(value: f64) -> u64 {
    // Float-to-int `as` saturates and maps NaN to 0
    value.max(0.0) as u64
}

/// Joins chunk records to text-mapping entries by normalized audio path.
///
/// The chunk file is compared as written; only the text-mapping side is
/// normalized. The first matching entry wins.
pub fn join_chunks(chunks: &[ChunkRecord], texts: &[TextMappingEntry]) -> Vec<ChunkRow> {
    let normalized: Vec<TextMappingEntry> = texts.iter().map(TextMappingEntry::normalized).collect();

    chunks
        .iter()
        .map(|chunk| ChunkRow {
            start: ms_to_hms(offset_ms(chunk.start_ms)),
            end: ms_to_hms(offset_ms(chunk.end_ms)),
            audio_file: chunk.chunk_file.clone(),
            text_file: normalized
                .iter()
                .find(|t| t.audio_file == chunk.chunk_file)
                .map(|t| t.text_file.clone()),
        })
        .collect()
}

/// Lays joined chunks out as a `Start | End | Audio File | Text File` table.
pub fn chunk_table(rows: &[ChunkRow]) -> Table {
    let mut table = Table::with_headers(&["Start", "End", "Audio File", "Text File"]);
    for row in rows {
        table.push_row([
            row.start.clone(),
            row.end.clone(),
            row.audio_file.clone(),
            row.text_file
                .clone()
                .unwrap_or_else(|| UNMATCHED_PLACEHOLDER.to_string()),
        ]);
    }
    table
}

/// Lays a text mapping out as an `Audio File | Text File` table.
pub fn text_mapping_table(entries: &[TextMappingEntry]) -> Table {
    let mut table = Table::with_headers(&["Audio File", "Text File"]);
    for entry in entries.iter().map(TextMappingEntry::normalized) {
        table.push_row([entry.audio_file, entry.text_file]);
    }
    table
}
