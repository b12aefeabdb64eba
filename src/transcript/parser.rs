//! Transcript line and document parsing.

use super::models::{TranscriptDocument, TranscriptLine};
use super::timestamp::{parse_timestamp, TimestampFormat};
use regex::Regex;

/// Parser for `[<start> - <end>] <speaker>: <text>` transcript lines.
pub struct LineParser {
    line_regex: Regex,
    format: TimestampFormat,
}

impl LineParser {
    /// Create a parser for the given timestamp syntax.
    pub fn new(format: TimestampFormat) -> Self {
        let token = format.token_pattern();
        let line_regex = Regex::new(&format!(
            r"^\[({token}) - ({token})\] ([^:]+): (.+)$",
            token = token
        ))
        .expect("Invalid regex");

        Self { line_regex, format }
    }

    /// Timestamp syntax this parser accepts.
    pub fn format(&self) -> TimestampFormat {
        self.format
    }

    /// Parse one line of text into a [`TranscriptLine`].
    ///
    /// Returns `None` for anything that is not a transcript line (blank
    /// lines, header metadata, malformed content). Never an error; callers
    /// treat `None` as "not a transcript line".
    pub fn parse_line(&self, raw_line: &str) -> Option<TranscriptLine> {
        let caps = self.line_regex.captures(raw_line.trim_end())?;

        let start_seconds = parse_timestamp(&caps[1], self.format)?;
        let end_seconds = parse_timestamp(&caps[2], self.format)?;
        let speaker = caps[3].trim().to_string();
        let text = caps[4].trim().to_string();

        if text.is_empty() {
            return None;
        }

        Some(TranscriptLine {
            start_seconds,
            end_seconds,
            speaker,
            text,
        })
    }

    /// Parse a whole transcript file.
    ///
    /// Lines preceding the first parseable transcript line are collected
    /// verbatim as header metadata. Once the body has started, lines that
    /// fail to parse are skipped.
    pub fn parse_document(&self, input: &str) -> TranscriptDocument {
        let mut document = TranscriptDocument::default();

        for raw_line in input.lines() {
            match self.parse_line(raw_line) {
                Some(line) => document.lines.push(line),
                None if document.lines.is_empty() => {
                    document.header.push(raw_line.to_string());
                }
                None => {
                    tracing::debug!("Skipping unparseable line: {:?}", raw_line);
                }
            }
        }

        document
    }
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new(TimestampFormat::default())
    }
}
