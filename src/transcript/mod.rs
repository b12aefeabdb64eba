//! Transcript parsing, merging, and formatting.
//!
//! The core of snakk: a diarized transcript is a plain-text file of
//! `[<start> - <end>] <speaker>: <text>` lines, usually preceded by a few
//! header lines of metadata. Consolidation merges consecutive lines from
//! the same speaker into one segment per speaker turn.
//!
//! The whole pipeline is synchronous and pure: parse the document, fold
//! the lines into segments, render the result. File I/O belongs to the
//! caller.

mod format;
mod merge;
mod models;
mod parser;
mod timestamp;

pub use format::{format_segment, render_document, OutputFormat, SegmentExport, TranscriptExport};
pub use merge::{merge, MergeOptions};
pub use models::{MergedSegment, TranscriptDocument, TranscriptLine};
pub use parser::LineParser;
pub use timestamp::{format_timestamp, parse_timestamp, TimestampFormat};
