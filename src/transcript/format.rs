//! Consolidated transcript output formatting (text, JSON).

use super::models::MergedSegment;
use super::timestamp::{format_timestamp, TimestampFormat};
use serde::Serialize;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json.", s)),
        }
    }
}

/// JSON-serializable consolidated transcript for export.
#[derive(Debug, Serialize)]
pub struct TranscriptExport<'a> {
    pub header: &'a [String],
    pub segment_count: usize,
    pub segments: Vec<SegmentExport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct SegmentExport<'a> {
    pub speaker: &'a str,
    pub text: &'a str,
    pub start_seconds: f64,
    pub end_seconds: f64,
}

/// Format one merged segment in the canonical line shape.
///
/// The result re-parses with [`LineParser`](super::LineParser) using the
/// same timestamp format, so consolidated output can be fed back in.
pub fn format_segment(segment: &MergedSegment, ts_format: TimestampFormat) -> String {
    format!(
        "[{} - {}] {}: {}",
        format_timestamp(segment.start_seconds, ts_format),
        format_timestamp(segment.end_seconds, ts_format),
        segment.speaker,
        segment.text
    )
}

/// Render a consolidated transcript for output.
pub fn render_document(
    header: &[String],
    segments: &[MergedSegment],
    ts_format: TimestampFormat,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Text => render_text(header, segments, ts_format),
        OutputFormat::Json => render_json(header, segments),
    }
}

/// Render as plain text: header verbatim, then one segment per paragraph.
fn render_text(header: &[String], segments: &[MergedSegment], ts_format: TimestampFormat) -> String {
    let mut output = String::new();

    for line in header {
        output.push_str(line);
        output.push('\n');
    }

    // Exactly one blank line between header and body
    if !header.is_empty() && header.last().map(|l| !l.is_empty()).unwrap_or(false) {
        output.push('\n');
    }

    for segment in segments {
        output.push_str(&format_segment(segment, ts_format));
        output.push_str("\n\n");
    }

    output
}

/// Render as pretty-printed JSON.
fn render_json(header: &[String], segments: &[MergedSegment]) -> String {
    let export = TranscriptExport {
        header,
        segment_count: segments.len(),
        segments: segments
            .iter()
            .map(|s| SegmentExport {
                speaker: &s.speaker,
                text: &s.text,
                start_seconds: s.start_seconds,
                end_seconds: s.end_seconds,
            })
            .collect(),
    };

    serde_json::to_string_pretty(&export).unwrap_or_else(|_| "{}".to_string())
}
