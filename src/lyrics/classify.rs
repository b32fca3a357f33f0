//! Line classification.

use super::patterns::CHORD_LINE;
use crate::types::LineKind;

/// Classify one line of lyrics.
///
/// Judged on the line alone: blank lines are `Empty`, lines made only of
/// chord tokens are `Chord`, everything else is `Text`.
pub fn classify_line(line: &str) -> LineKind {
    if line.trim().is_empty() {
        LineKind::Empty
    } else if CHORD_LINE.is_match(line) {
        LineKind::Chord
    } else {
        LineKind::Text
    }
}

/// Whether `line` is a non-blank chord line.
pub fn is_chord_line(line: &str) -> bool {
    classify_line(line) == LineKind::Chord
}
