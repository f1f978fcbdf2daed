//! SRT subtitle parsing.

use super::{split_lines, Table};
use crate::error::ViewerError;
use once_cell::sync::Lazy;
use regex::Regex;

static BLOCK_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n\r?\n").expect("block separator pattern is valid"));

/// One subtitle block, with the millisecond part of each time dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleCue {
    pub index: String,
    pub start: String,
    pub end: String,
    pub text: String,
}

/// Parses SRT content into cues.
///
/// Blocks are separated by a blank line. The first line of a block is the
/// index, the second the `start --> end` range and the rest the caption,
/// joined with spaces. Blocks with fewer than two lines are skipped; a
/// timing line without `-->` is a parse failure.
pub fn parse_subtitles(text: &str) -> Result<Vec<SubtitleCue>, ViewerError> {
    let mut cues = Vec::new();

    for block in BLOCK_SEPARATOR.split(text.trim()) {
        let lines: Vec<&str> = split_lines(block).collect();
        if lines.len() < 2 {
            continue;
        }

        let (start, end) = lines[1].split_once("-->").ok_or_else(|| {
            ViewerError::ParseFailure(format!("Missing '-->' in timing line: {}", lines[1]))
        })?;

        cues.push(SubtitleCue {
            index: lines[0].trim().to_string(),
            start: strip_millis(start),
            end: strip_millis(end),
            text: lines[2..].join(" ").trim().to_string(),
        });
    }

    Ok(cues)
}

fn strip_millis(time: &str) -> String {
    time.split(',').next().unwrap_or(time).trim().to_string()
}

/// Lays cues out as a `# | Start | End | Text` table.
pub fn subtitle_table(cues: &[SubtitleCue]) -> Table {
    let mut table = Table::with_headers(&["#", "Start", "End", "Text"]);
    for cue in cues {
        table.push_row([
            cue.index.as_str(),
            cue.start.as_str(),
            cue.end.as_str(),
            cue.text.as_str(),
        ]);
    }
    table
}
