//! Display formatting of lyric bodies.

use super::classify::classify_line;
use crate::types::{LineKind, LyricLine};

/// Split `lyrics` on `\n` and classify every line.
///
/// One entry per input line, in order. Chord and text lines keep their
/// content verbatim (leading spaces carry chord alignment); empty lines get
/// blank content.
pub fn parse_lyrics(lyrics: &str) -> Vec<LyricLine> {
    lyrics
        .split('\n')
        .map(|line| match classify_line(line) {
            LineKind::Empty => LyricLine::empty(),
            kind => LyricLine::new(kind, line),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_chord_and_text() {
        let lines = parse_lyrics("    C        G\nVerse text here");
        assert_eq!(
            lines,
            vec![
                LyricLine::new(LineKind::Chord, "    C        G"),
                LyricLine::new(LineKind::Text, "Verse text here"),
            ]
        );
    }

    #[test]
    fn test_empty_lines_are_blanked() {
        let lines = parse_lyrics("Verse 1\n   \nC");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], LyricLine::empty());
        assert_eq!(lines[2].kind, LineKind::Chord);
    }

    #[test]
    fn test_trailing_newline_yields_trailing_empty() {
        let lines = parse_lyrics("G\nGrace\n");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].kind, LineKind::Empty);
    }

    #[test]
    fn test_empty_input_is_one_empty_line() {
        assert_eq!(parse_lyrics(""), vec![LyricLine::empty()]);
    }
}
