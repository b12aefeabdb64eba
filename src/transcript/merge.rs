//! Consecutive same-speaker segment merging.

use super::models::{MergedSegment, TranscriptLine};

/// Options controlling segment merging.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MergeOptions {
    /// Maximum silence in seconds between same-speaker lines that still
    /// merges. `None` merges same-speaker runs across any gap, which
    /// matches the diarization pipeline's output.
    pub max_merge_gap: Option<f64>,
}

/// Merge consecutive lines from the same speaker into segments.
///
/// A single left-to-right pass over the input: each line either extends the
/// open segment (same speaker, within the gap threshold if one is set) or
/// closes it and opens a new one. Every line lands in exactly one segment
/// and order is preserved. Empty input yields an empty vector.
pub fn merge(lines: &[TranscriptLine], options: &MergeOptions) -> Vec<MergedSegment> {
    let mut segments = Vec::new();
    let mut current: Option<MergedSegment> = None;

    for line in lines {
        current = match current.take() {
            None => Some(MergedSegment::from(line.clone())),
            Some(mut segment)
                if segment.speaker == line.speaker && within_gap(&segment, line, options) =>
            {
                segment.end_seconds = line.end_seconds;
                segment.text.push(' ');
                segment.text.push_str(&line.text);
                Some(segment)
            }
            Some(segment) => {
                segments.push(segment);
                Some(MergedSegment::from(line.clone()))
            }
        };
    }

    if let Some(segment) = current {
        segments.push(segment);
    }

    segments
}

fn within_gap(segment: &MergedSegment, line: &TranscriptLine, options: &MergeOptions) -> bool {
    match options.max_merge_gap {
        Some(max_gap) => line.start_seconds - segment.end_seconds <= max_gap,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lines() -> Vec<TranscriptLine> {
        vec![
            TranscriptLine::new(0.0, 2.0, "SPEAKER_00", "Hi there."),
            TranscriptLine::new(2.1, 4.0, "SPEAKER_00", "Welcome to the show."),
            TranscriptLine::new(4.1, 6.0, "SPEAKER_01", "Thanks for having me."),
            TranscriptLine::new(6.1, 8.0, "SPEAKER_00", "Let's get started."),
        ]
    }

    #[test]
    fn test_merge_consecutive_same_speaker() {
        let segments = merge(&sample_lines(), &MergeOptions::default());

        assert_eq!(segments.len(), 3);

        assert_eq!(segments[0].speaker, "SPEAKER_00");
        assert_eq!(segments[0].start_seconds, 0.0);
        assert_eq!(segments[0].end_seconds, 4.0);
        assert_eq!(segments[0].text, "Hi there. Welcome to the show.");

        assert_eq!(segments[1].speaker, "SPEAKER_01");
        assert_eq!(segments[1].text, "Thanks for having me.");

        // Same speaker as segment 0, but not adjacent: stays separate
        assert_eq!(segments[2].speaker, "SPEAKER_00");
        assert_eq!(segments[2].text, "Let's get started.");
    }

    #[test]
    fn test_merge_empty_input() {
        let segments = merge(&[], &MergeOptions::default());
        assert!(segments.is_empty());
    }

    #[test]
    fn test_merge_single_line() {
        let lines = vec![TranscriptLine::new(1.0, 2.0, "SPEAKER_00", "Only line.")];
        let segments = merge(&lines, &MergeOptions::default());

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "Only line.");
    }

    #[test]
    fn test_merge_single_speaker_collapses_to_one() {
        let lines = vec![
            TranscriptLine::new(0.0, 1.0, "SPEAKER_00", "One."),
            TranscriptLine::new(1.1, 2.0, "SPEAKER_00", "Two."),
            TranscriptLine::new(2.1, 3.0, "SPEAKER_00", "Three."),
        ];
        let segments = merge(&lines, &MergeOptions::default());

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start_seconds, 0.0);
        assert_eq!(segments[0].end_seconds, 3.0);
        assert_eq!(segments[0].text, "One. Two. Three.");
    }

    #[test]
    fn test_merge_unbounded_gap_by_default() {
        let lines = vec![
            TranscriptLine::new(60.0, 62.0, "SPEAKER_00", "Minute one."),
            TranscriptLine::new(2400.0, 2402.0, "SPEAKER_00", "Minute forty."),
        ];
        let segments = merge(&lines, &MergeOptions::default());

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].end_seconds, 2402.0);
    }

    #[test]
    fn test_merge_gap_threshold_splits() {
        let lines = vec![
            TranscriptLine::new(0.0, 2.0, "SPEAKER_00", "Before the pause."),
            TranscriptLine::new(10.0, 12.0, "SPEAKER_00", "After the pause."),
        ];
        let options = MergeOptions {
            max_merge_gap: Some(2.0),
        };
        let segments = merge(&lines, &options);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "Before the pause.");
        assert_eq!(segments[1].text, "After the pause.");
        assert_eq!(segments[1].start_seconds, 10.0);
    }

    #[test]
    fn test_merge_gap_threshold_still_merges_small_gaps() {
        let lines = vec![
            TranscriptLine::new(0.0, 2.0, "SPEAKER_00", "First."),
            TranscriptLine::new(3.0, 4.0, "SPEAKER_00", "Second."),
        ];
        let options = MergeOptions {
            max_merge_gap: Some(2.0),
        };
        let segments = merge(&lines, &options);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "First. Second.");
    }

    #[test]
    fn test_merge_preserves_content_in_order() {
        let lines = sample_lines();
        let segments = merge(&lines, &MergeOptions::default());

        let merged_text = segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let original_text = lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        assert_eq!(merged_text, original_text);
    }

    #[test]
    fn test_merge_adjacent_lines_grouping() {
        let lines = sample_lines();
        let segments = merge(&lines, &MergeOptions::default());

        // Adjacent same-speaker lines share a segment; differing speakers
        // land in adjacent segments.
        for pair in lines.windows(2) {
            let first_segment = segments
                .iter()
                .position(|s| s.text.contains(&pair[0].text))
                .unwrap();
            let second_segment = segments
                .iter()
                .position(|s| s.text.contains(&pair[1].text))
                .unwrap();

            if pair[0].speaker == pair[1].speaker {
                assert_eq!(first_segment, second_segment);
            } else {
                assert_eq!(first_segment + 1, second_segment);
            }
        }
    }

    #[test]
    fn test_merge_output_ordered_by_start() {
        let segments = merge(&sample_lines(), &MergeOptions::default());
        for pair in segments.windows(2) {
            assert!(pair[0].start_seconds <= pair[1].start_seconds);
        }
    }
}
