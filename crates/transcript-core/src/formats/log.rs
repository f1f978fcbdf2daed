//! Job log parsing.
//!
//! The backend logs with `%(asctime)s %(levelname)s: %(message)s` and a
//! `%Y-%m-%d %H:%M:%S` date format. Lines that do not follow it (tracebacks,
//! wrapped messages) are kept as message-only rows. Digits and the level
//! word are matched as ASCII only.

use super::{split_lines, Table};
use once_cell::sync::Lazy;
use regex::Regex;

static LOG_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4}-[0-9]{2}-[0-9]{2}) ([0-9]{2}:[0-9]{2}:[0-9]{2}) ([A-Za-z0-9_]+): (.+)$")
        .expect("log line pattern is valid")
});

/// One row of the log table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogRow {
    pub date: String,
    pub time: String,
    pub level: String,
    pub message: String,
}

impl LogRow {
    /// Parses a single line. Never fails: a line without a leading
    /// timestamp becomes a row with only the message column set.
    pub fn parse(line: &str) -> Self {
        match LOG_LINE.captures(line) {
            Some(caps) => Self {
                date: caps[1].to_string(),
                time: caps[2].to_string(),
                level: caps[3].to_string(),
                message: caps[4].to_string(),
            },
            None => Self {
                message: line.to_string(),
                ..Self::default()
            },
        }
    }
}

/// Parses a whole log file, one row per line.
pub fn parse_log(text: &str) -> Vec<LogRow> {
    split_lines(text.trim()).map(LogRow::parse).collect()
}

/// Lays log rows out as a `Date | Time | Level | Message` table.
pub fn log_table(rows: &[LogRow]) -> Table {
    let mut table = Table::with_headers(&["Date", "Time", "Level", "Message"]);
    for row in rows {
        table.push_row([
            row.date.as_str(),
            row.time.as_str(),
            row.level.as_str(),
            row.message.as_str(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_line() {
        let row = LogRow::parse("2024-05-01 12:00:03 INFO: Converted input.mp3");
        assert_eq!(row.date, "2024-05-01");
        assert_eq!(row.time, "12:00:03");
        assert_eq!(row.level, "INFO");
        assert_eq!(row.message, "Converted input.mp3");
    }

    #[test]
    fn test_malformed_line_keeps_raw_message() {
        let rows = parse_log("Traceback (most recent call last):");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, "");
        assert_eq!(rows[0].time, "");
        assert_eq!(rows[0].level, "");
        assert_eq!(rows[0].message, "Traceback (most recent call last):");
    }

    #[test]
    fn test_mixed_lines_and_crlf() {
        let text = "2024-05-01 12:00:03 INFO: start\r\n  File \"x.py\", line 3\r\n2024-05-01 12:00:04 ERROR: boom\n";
        let rows = parse_log(text);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].level, "INFO");
        assert_eq!(rows[1].message, "  File \"x.py\", line 3");
        assert_eq!(rows[2].message, "boom");
    }

    #[test]
    fn test_line_without_message_is_malformed() {
        let row = LogRow::parse("2024-05-01 12:00:03 INFO: ");
        assert_eq!(row.level, "");
        assert_eq!(row.message, "2024-05-01 12:00:03 INFO: ");
    }

    #[test]
    fn test_non_ascii_digits_and_levels_are_malformed() {
        // Arabic-Indic digits in the date
        let row = LogRow::parse("٢٠٢٤-05-01 12:00:03 INFO: hi");
        assert_eq!(row.date, "");
        assert_eq!(row.message, "٢٠٢٤-05-01 12:00:03 INFO: hi");

        let row = LogRow::parse("2024-05-01 12:00:03 ÉRREUR: hi");
        assert_eq!(row.level, "");

        // Messages themselves may be any text
        let row = LogRow::parse("2024-05-01 12:00:03 INFO: café ✓");
        assert_eq!(row.message, "café ✓");
    }

    #[test]
    fn test_log_table_columns() {
        let table = log_table(&parse_log("2024-05-01 12:00:03 WARNING: slow\noops"));
        assert_eq!(table.headers, vec!["Date", "Time", "Level", "Message"]);
        assert_eq!(table.rows[0], vec!["2024-05-01", "12:00:03", "WARNING", "slow"]);
        assert_eq!(table.rows[1], vec!["", "", "", "oops"]);
    }
}
