//! Chord token transposition along the chromatic scale.
//!
//! A chord token is a root letter `A`-`G`, an optional `#` or `b`, and an
//! opaque suffix (`m`, `7`, `maj7`, `sus4`, `/G`, ...). Only the root is ever
//! remapped. Output is always sharp-spelled.

use crate::constants::music::{FLAT_TO_SHARP, NOTES, SEMITONES_PER_OCTAVE};

// Allow unwrap for compile-time constant regex patterns in lazy_static blocks
#[allow(clippy::unwrap_used)]
mod patterns {
    use lazy_static::lazy_static;
    use regex::Regex;

    lazy_static! {
        /// Whole chord split into root and suffix. The suffix may span lines.
        pub static ref CHORD_PARTS: Regex = Regex::new(r"(?s)^([A-G][#b]?)(.*)$").unwrap();

        /// Leading root of a key name such as `Am` or `F#`.
        pub static ref KEY_ROOT: Regex = Regex::new(r"^([A-G][#b]?)").unwrap();
    }
}

/// Map a flat root spelling onto its sharp equivalent. Anything else is
/// returned as-is.
pub fn normalize_root(root: &str) -> &str {
    FLAT_TO_SHARP
        .iter()
        .find(|(flat, _)| *flat == root)
        .map_or(root, |&(_, sharp)| sharp)
}

/// Position of a root in the chromatic scale, after flat normalization.
pub fn note_index(root: &str) -> Option<usize> {
    let root = normalize_root(root);
    NOTES.iter().position(|n| *n == root)
}

/// Shift a chromatic index by `semitones`, wrapping into `0..12`.
fn shift_index(index: usize, semitones: i32) -> usize {
    let offset = usize::try_from(semitones.rem_euclid(SEMITONES_PER_OCTAVE)).unwrap_or(0);
    (index + offset) % NOTES.len()
}

/// Transpose a single chord token by `semitones`.
///
/// Unrecognized tokens (empty, no leading `A`-`G`, or a root such as `Cb`
/// that is in neither table) are returned unchanged.
///
/// ```
/// use chordbook::chord::transpose_chord;
///
/// assert_eq!(transpose_chord("Am", 2), "Bm");
/// assert_eq!(transpose_chord("Cmaj7/G", 5), "Fmaj7/G");
/// assert_eq!(transpose_chord("Bbm", -2), "G#m");
/// ```
pub fn transpose_chord(chord: &str, semitones: i32) -> String {
    if chord.trim().is_empty() {
        return chord.to_string();
    }

    let Some(caps) = patterns::CHORD_PARTS.captures(chord) else {
        return chord.to_string();
    };
    let (Some(root), Some(suffix)) = (caps.get(1), caps.get(2)) else {
        return chord.to_string();
    };

    let Some(index) = note_index(root.as_str()) else {
        return chord.to_string();
    };

    let new_root = NOTES[shift_index(index, semitones)];
    format!("{new_root}{}", suffix.as_str())
}

/// Semitones up from the root of `from_key` to the root of `to_key`, in `0..12`.
///
/// Returns 0 when either key cannot be parsed.
pub fn calculate_interval(from_key: &str, to_key: &str) -> u8 {
    let root_index = |key: &str| {
        patterns::KEY_ROOT
            .captures(key)
            .and_then(|caps| caps.get(1))
            .and_then(|m| note_index(m.as_str()))
    };

    let (Some(from), Some(to)) = (root_index(from_key), root_index(to_key)) else {
        return 0;
    };

    u8::try_from((to + NOTES.len() - from) % NOTES.len()).unwrap_or(0)
}
