//! Consolidate command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::transcript::{
    merge, render_document, LineParser, MergeOptions, OutputFormat, TimestampFormat,
};
use anyhow::{Context, Result};

/// Run the consolidate command.
pub fn run_consolidate(
    input: &str,
    output: &str,
    timestamps: Option<String>,
    format: Option<String>,
    max_gap: Option<f64>,
    settings: Settings,
) -> Result<()> {
    let ts_format: TimestampFormat = match timestamps {
        Some(s) => s.parse().map_err(|e: String| anyhow::anyhow!(e))?,
        None => settings.transcript.timestamp_format,
    };

    let output_format: OutputFormat = format
        .unwrap_or_else(|| settings.transcript.output_format.clone())
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let input_path = Settings::expand_path(input);
    let output_path = Settings::expand_path(output);

    // The only fatal condition: input cannot be read
    let raw = std::fs::read_to_string(&input_path)
        .with_context(|| format!("Failed to read {}", input_path.display()))?;

    let parser = LineParser::new(ts_format);
    let document = parser.parse_document(&raw);

    tracing::debug!(
        "Parsed {} header lines and {} transcript lines",
        document.header.len(),
        document.lines.len()
    );

    if document.lines.is_empty() {
        Output::warning(&format!(
            "No {} transcript lines found in {}.",
            ts_format,
            input_path.display()
        ));
    }

    let options = MergeOptions {
        max_merge_gap: max_gap.or(settings.transcript.max_merge_gap_seconds),
    };
    let segments = merge(&document.lines, &options);

    let rendered = render_document(&document.header, &segments, ts_format, output_format);

    std::fs::write(&output_path, rendered)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    Output::success(&format!(
        "Consolidated {} lines into {} segments: {}",
        document.lines.len(),
        segments.len(),
        output_path.display()
    ));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_consolidate_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("raw.txt");
        let output_path = dir.path().join("consolidated.txt");

        let mut input = std::fs::File::create(&input_path).unwrap();
        writeln!(input, "Original audio file: interview.wav").unwrap();
        writeln!(input).unwrap();
        writeln!(input, "[00:00.00 - 00:02.00] SPEAKER_00: Hi there.").unwrap();
        writeln!(input, "[00:02.10 - 00:04.00] SPEAKER_00: Welcome to the show.").unwrap();
        writeln!(input, "[00:04.10 - 00:06.00] SPEAKER_01: Thanks for having me.").unwrap();
        drop(input);

        run_consolidate(
            input_path.to_str().unwrap(),
            output_path.to_str().unwrap(),
            None,
            None,
            None,
            Settings::default(),
        )
        .unwrap();

        let consolidated = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(
            consolidated,
            "Original audio file: interview.wav\n\n\
             [00:00.00 - 00:04.00] SPEAKER_00: Hi there. Welcome to the show.\n\n\
             [00:04.10 - 00:06.00] SPEAKER_01: Thanks for having me.\n\n"
        );
    }

    #[test]
    fn test_consolidate_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let output = dir.path().join("out.txt");

        let result = run_consolidate(
            missing.to_str().unwrap(),
            output.to_str().unwrap(),
            None,
            None,
            None,
            Settings::default(),
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_consolidate_json_output() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("raw.txt");
        let output_path = dir.path().join("consolidated.json");

        std::fs::write(
            &input_path,
            "[12.50s - 15.30s] SPEAKER_00: Hello there.\n",
        )
        .unwrap();

        run_consolidate(
            input_path.to_str().unwrap(),
            output_path.to_str().unwrap(),
            Some("seconds".to_string()),
            Some("json".to_string()),
            None,
            Settings::default(),
        )
        .unwrap();

        let consolidated = std::fs::read_to_string(&output_path).unwrap();
        assert!(consolidated.contains("\"segment_count\": 1"));
        assert!(consolidated.contains("\"speaker\": \"SPEAKER_00\""));
    }
}
