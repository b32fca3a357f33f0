//! Key detection from chord lines.

use super::classify::is_chord_line;
use super::patterns::CHORD_TOKEN;

/// The first chord of the first chord line, taken as the song's key.
///
/// Text and blank lines before it are skipped. Returns `None` if no line is
/// a chord line.
pub fn detect_original_key(lyrics: &str) -> Option<String> {
    lyrics
        .split('\n')
        .find(|line| is_chord_line(line))
        .and_then(|line| CHORD_TOKEN.find(line))
        .map(|m| m.as_str().to_string())
}
