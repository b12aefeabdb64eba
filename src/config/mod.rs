//! Configuration module for snakk.
//!
//! Handles loading and managing application settings.

mod settings;

pub use settings::{GeneralSettings, Settings, TranscriptSettings};
