//! Transposition of whole lyric bodies.

use regex::Captures;

use super::classify::is_chord_line;
use super::detect::detect_original_key;
use super::format::parse_lyrics;
use super::patterns::CHORD_TOKEN;
use crate::chord::transpose_chord;
use crate::types::TransposedLyrics;

/// Transpose every chord token in a chord line.
///
/// Everything between tokens is copied through untouched, so chords keep
/// their columns as long as the new root has the same width.
pub fn transpose_chord_line(line: &str, semitones: i32) -> String {
    CHORD_TOKEN
        .replace_all(line, |caps: &Captures<'_>| transpose_chord(&caps[0], semitones))
        .into_owned()
}

/// Transpose all chord lines of `lyrics`; other lines pass through verbatim.
///
/// The result has exactly as many lines as the input.
pub fn transpose_lyrics(lyrics: &str, semitones: i32) -> String {
    lyrics
        .split('\n')
        .map(|line| {
            if is_chord_line(line) {
                transpose_chord_line(line, semitones)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Transpose a lyric body along with its key.
///
/// The key is `original_key` if given, otherwise the key detected from the
/// untransposed lyrics. The transposed text is also classified for display.
pub fn transpose_song(lyrics: &str, original_key: Option<&str>, semitones: i32) -> TransposedLyrics {
    let transposed = transpose_lyrics(lyrics, semitones);

    let transposed_key = original_key
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .or_else(|| detect_original_key(lyrics))
        .map(|key| transpose_chord(&key, semitones));

    let formatted_lyrics = parse_lyrics(&transposed);

    TransposedLyrics {
        lyrics: transposed,
        transposed_key,
        formatted_lyrics,
    }
}
