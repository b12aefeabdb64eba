//! Timestamp parsing and formatting.
//!
//! Transcript files come in a few timestamp syntaxes depending on which
//! pipeline produced them. One parser and one formatter handle all of them,
//! parameterized by [`TimestampFormat`].

use serde::{Deserialize, Serialize};

/// Timestamp syntax used by a transcript file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimestampFormat {
    /// `MM:SS.ss` (minutes, seconds, hundredths). The canonical format.
    #[default]
    MinutesSeconds,
    /// `HH:MM:SS` (whole seconds).
    HoursMinutesSeconds,
    /// `123.45s` (raw seconds with an `s` suffix, as written by the
    /// diarization pipeline).
    Seconds,
}

impl std::str::FromStr for TimestampFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mm:ss" | "minutes" | "minutes-seconds" => Ok(TimestampFormat::MinutesSeconds),
            "hh:mm:ss" | "hours" | "hours-minutes-seconds" => {
                Ok(TimestampFormat::HoursMinutesSeconds)
            }
            "seconds" | "s" => Ok(TimestampFormat::Seconds),
            _ => Err(format!(
                "Unknown timestamp format: {}. Use mm:ss, hh:mm:ss, or seconds.",
                s
            )),
        }
    }
}

impl std::fmt::Display for TimestampFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimestampFormat::MinutesSeconds => write!(f, "mm:ss"),
            TimestampFormat::HoursMinutesSeconds => write!(f, "hh:mm:ss"),
            TimestampFormat::Seconds => write!(f, "seconds"),
        }
    }
}

impl TimestampFormat {
    /// Regex fragment matching one timestamp token in this syntax.
    pub(crate) fn token_pattern(&self) -> &'static str {
        match self {
            TimestampFormat::MinutesSeconds => r"\d+:\d{2}(?:\.\d{1,2})?",
            TimestampFormat::HoursMinutesSeconds => r"\d+:\d{2}:\d{2}",
            TimestampFormat::Seconds => r"\d+(?:\.\d+)?s",
        }
    }
}

/// Parse a timestamp token into seconds.
///
/// Returns `None` when the token does not match the given syntax.
pub fn parse_timestamp(token: &str, format: TimestampFormat) -> Option<f64> {
    let token = token.trim();
    match format {
        TimestampFormat::MinutesSeconds => {
            let (minutes, seconds) = token.split_once(':')?;
            let minutes: u64 = minutes.parse().ok()?;
            let seconds: f64 = seconds.parse().ok()?;
            if seconds >= 60.0 {
                return None;
            }
            Some(minutes as f64 * 60.0 + seconds)
        }
        TimestampFormat::HoursMinutesSeconds => {
            let mut parts = token.split(':');
            let hours: u64 = parts.next()?.parse().ok()?;
            let minutes: u64 = parts.next()?.parse().ok()?;
            let seconds: u64 = parts.next()?.parse().ok()?;
            if parts.next().is_some() || minutes >= 60 || seconds >= 60 {
                return None;
            }
            Some((hours * 3600 + minutes * 60 + seconds) as f64)
        }
        TimestampFormat::Seconds => {
            let seconds = token.strip_suffix('s')?;
            seconds.parse().ok()
        }
    }
}

/// Format seconds as a timestamp token in the given syntax.
pub fn format_timestamp(seconds: f64, format: TimestampFormat) -> String {
    match format {
        TimestampFormat::MinutesSeconds => {
            let total_hundredths = (seconds * 100.0).round() as u64;
            let minutes = total_hundredths / 6000;
            let rem = total_hundredths % 6000;
            format!("{:02}:{:02}.{:02}", minutes, rem / 100, rem % 100)
        }
        TimestampFormat::HoursMinutesSeconds => {
            let total_seconds = seconds.round() as u64;
            let hours = total_seconds / 3600;
            let minutes = (total_seconds % 3600) / 60;
            let secs = total_seconds % 60;
            format!("{:02}:{:02}:{:02}", hours, minutes, secs)
        }
        TimestampFormat::Seconds => format!("{:.2}s", seconds),
    }
}
