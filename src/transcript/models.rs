//! Data models for transcript consolidation.

use serde::{Deserialize, Serialize};

/// One timestamped, speaker-attributed line of a transcript file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptLine {
    /// Start time in seconds.
    pub start_seconds: f64,
    /// End time in seconds.
    pub end_seconds: f64,
    /// Speaker label (diarization label or a name).
    pub speaker: String,
    /// Spoken content.
    pub text: String,
}

impl TranscriptLine {
    /// Create a new transcript line.
    pub fn new(start_seconds: f64, end_seconds: f64, speaker: &str, text: &str) -> Self {
        Self {
            start_seconds,
            end_seconds,
            speaker: speaker.to_string(),
            text: text.to_string(),
        }
    }
}

/// A run of consecutive same-speaker lines merged into one segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedSegment {
    /// Start time of the first constituent line, in seconds.
    pub start_seconds: f64,
    /// End time of the last constituent line, in seconds.
    pub end_seconds: f64,
    /// Speaker label shared by all constituent lines.
    pub speaker: String,
    /// Constituent texts joined by single spaces, in original order.
    pub text: String,
}

impl From<TranscriptLine> for MergedSegment {
    fn from(line: TranscriptLine) -> Self {
        Self {
            start_seconds: line.start_seconds,
            end_seconds: line.end_seconds,
            speaker: line.speaker,
            text: line.text,
        }
    }
}

/// A parsed transcript file: header metadata plus timestamped lines.
///
/// Header lines are everything preceding the first line that parses as a
/// transcript line. They are preserved verbatim and re-emitted at the top
/// of the consolidated output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranscriptDocument {
    /// Verbatim lines preceding the transcript body.
    pub header: Vec<String>,
    /// Successfully parsed transcript lines, in file order.
    pub lines: Vec<TranscriptLine>,
}
