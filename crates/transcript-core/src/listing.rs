//! Batch listing.
//!
//! A folder is listed as a completed job when it contains `request.json`.
//! Batches are shown newest first by their `sent_time`.

use crate::formats::parse_request;
use crate::tree::BatchRow;
use chrono::NaiveDateTime;
use tracing::warn;

/// Builds batch rows from `(folder, request.json content)` pairs.
///
/// The segment count is the number of requested segments; a request
/// without any covers the whole file, which is one segment. Folders whose
/// `request.json` does not parse are skipped.
pub fn batches_from_requests<I>(entries: I) -> Vec<BatchRow>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut dated: Vec<(Option<NaiveDateTime>, BatchRow)> = entries
        .into_iter()
        .filter_map(|(folder, content)| match parse_request(&content) {
            Ok(meta) => {
                let sent = parse_sent_time(&meta.sent_time);
                let segment_count = meta.segments.len().max(1);
                Some((sent, BatchRow::new(folder, segment_count)))
            }
            Err(e) => {
                warn!("Skipping {}: unreadable request.json: {}", folder, e);
                None
            }
        })
        .collect();

    // Newest first; undated batches sink to the bottom in folder order
    dated.sort_by(|(a_time, a), (b_time, b)| {
        b_time.cmp(a_time).then_with(|| a.folder.cmp(&b.folder))
    });

    dated.into_iter().map(|(_, batch)| batch).collect()
}

fn parse_sent_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_utc())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A `request.json` as the upload route writes it.
    fn request(sent_time: &str, segments: &[(&str, &str)]) -> String {
        let segments: Vec<_> = segments
            .iter()
            .map(|(start, end)| serde_json::json!({"start": start, "end": end}))
            .collect();
        serde_json::json!({
            "audio_filename": "a.mp3",
            "lang_key": "en",
            "segments": segments,
            "sent_time": sent_time,
            "tasks": {
                "converterCompleted": null,
                "chunkerCompleted": null,
                "transcriberCompleted": null,
                "assemblerCompleted": null,
                "cleanerCompleted": null
            }
        })
        .to_string()
    }

    #[test]
    fn test_sorted_newest_first() {
        let batches = batches_from_requests(vec![
            ("old".to_string(), request("2024-01-01T00:00:00", &[])),
            ("new".to_string(), request(
                "2024-06-01T00:00:00",
                &[("00:00:00", "00:10:00"), ("00:10:00", "")],
            )),
            ("mid".to_string(), request("2024-03-01T00:00:00.5", &[("", "00:05:00")])),
        ]);
        let folders: Vec<_> = batches.iter().map(|b| b.folder.as_str()).collect();
        assert_eq!(folders, vec!["new", "mid", "old"]);
        assert_eq!(batches[0].segment_count, 2);
        assert_eq!(batches[1].segment_count, 1);
    }

    #[test]
    fn test_no_segments_means_one() {
        let batches =
            batches_from_requests(vec![("job".to_string(), request("2024-01-01T00:00:00", &[]))]);
        assert_eq!(batches[0].segment_count, 1);
    }

    #[test]
    fn test_segment_objects_from_upload_are_counted() {
        let content = r#"{
            "audio_filename": "interview.wav",
            "lang_key": "es",
            "segments": [
                {"start": "00:00:00", "end": "00:10:00"},
                {"start": "00:10:00", "end": "00:20:00"},
                {"start": "00:20:00", "end": ""}
            ],
            "sent_time": "2024-05-01T12:00:00.123456",
            "tasks": {"converterCompleted": "2024-05-01T12:00:05.000001", "chunkerCompleted": null}
        }"#;

        let meta = parse_request(content).unwrap();
        assert_eq!(meta.segments.len(), 3);
        assert_eq!(meta.segments[0].end, "00:10:00");

        let batches = batches_from_requests(vec![("job".to_string(), content.to_string())]);
        assert_eq!(batches, vec![BatchRow::new("job", 3)]);
    }

    #[test]
    fn test_unreadable_requests_skipped_and_undated_last() {
        let batches = batches_from_requests(vec![
            ("broken".to_string(), "{".to_string()),
            ("undated".to_string(), request("soon", &[])),
            ("dated".to_string(), request("2024-01-01T00:00:00", &[])),
        ]);
        let folders: Vec<_> = batches.iter().map(|b| b.folder.as_str()).collect();
        assert_eq!(folders, vec!["dated", "undated"]);
    }
}
