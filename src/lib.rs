//! snakk - Podcast Transcript Consolidation
//!
//! A CLI tool for tidying speaker-diarized podcast transcripts.
//!
//! The name "snakk" comes from the Norwegian word for "talk."
//!
//! # Overview
//!
//! Diarization pipelines emit one timestamped line per recognized span,
//! which chops a single speaker turn into many short lines. snakk merges
//! consecutive lines from the same speaker back into one segment per turn:
//!
//! ```text
//! [00:00.00 - 00:02.00] SPEAKER_00: Hi there.
//! [00:02.10 - 00:04.00] SPEAKER_00: Welcome to the show.
//! ```
//!
//! becomes
//!
//! ```text
//! [00:00.00 - 00:04.00] SPEAKER_00: Hi there. Welcome to the show.
//! ```
//!
//! Header metadata preceding the transcript body is preserved verbatim.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `transcript` - Parsing, merging, and formatting
//! - `cli` - Command-line interface
//!
//! # Example
//!
//! ```rust
//! use snakk::transcript::{merge, LineParser, MergeOptions};
//!
//! let parser = LineParser::default();
//! let document = parser.parse_document(
//!     "[00:00.00 - 00:02.00] SPEAKER_00: Hi there.\n\
//!      [00:02.10 - 00:04.00] SPEAKER_00: Welcome to the show.\n",
//! );
//!
//! let segments = merge(&document.lines, &MergeOptions::default());
//! assert_eq!(segments.len(), 1);
//! assert_eq!(segments[0].text, "Hi there. Welcome to the show.");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod transcript;

pub use error::{Result, SnakkError};
