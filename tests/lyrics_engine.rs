//! End-to-end checks of the lyric engine through the public API.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use chordbook::lyrics::{transpose_chord_line, transpose_song};
use chordbook::types::{LineKind, LyricLine};
use chordbook::{
    calculate_interval, classify_line, detect_original_key, parse_lyrics, transpose_chord,
    transpose_lyrics,
};

const HYMN: &str = "\
Verse 1
    G          G7        C         G
Amazing grace how sweet the sound
                          D
That saved a wretch like me

    G          G7       C        G
I once was lost but now am found
    Em      D      G
Was blind but now I see
";

#[test]
fn transposing_a_hymn_moves_only_chord_lines() {
    let out = transpose_lyrics(HYMN, 2);
    let before: Vec<_> = HYMN.split('\n').collect();
    let after: Vec<_> = out.split('\n').collect();

    assert_eq!(before.len(), after.len());
    for (orig, new) in before.iter().zip(&after) {
        if classify_line(orig) == LineKind::Chord {
            assert_eq!(*new, transpose_chord_line(orig, 2));
        } else {
            assert_eq!(orig, new);
        }
    }
    assert_eq!(after[1], "    A          A7        D         A");
    assert_eq!(after[8], "    F#m      E      A");
}

#[test]
fn transposing_there_and_back_restores_sharp_lyrics() {
    for n in -11..=11 {
        assert_eq!(transpose_lyrics(&transpose_lyrics(HYMN, n), -n), HYMN);
    }
}

#[test]
fn formatted_lines_match_input_lines() {
    let lines = parse_lyrics(HYMN);
    assert_eq!(lines.len(), HYMN.split('\n').count());
    assert_eq!(lines[0], LyricLine::new(LineKind::Text, "Verse 1"));
    assert_eq!(lines[1].kind, LineKind::Chord);
    assert_eq!(lines[5], LyricLine::empty());
    assert_eq!(lines.last(), Some(&LyricLine::empty()));
}

#[test]
fn detected_key_and_interval_agree_with_transposition() {
    let key = detect_original_key(HYMN).unwrap();
    assert_eq!(key, "G");

    let out = transpose_song(HYMN, None, -5);
    let new_key = out.transposed_key.unwrap();
    assert_eq!(new_key, "D");
    assert_eq!(calculate_interval(&key, &new_key), 7);
    assert_eq!(new_key, transpose_chord(&key, -5));
}

#[test]
fn formatted_output_serializes_to_wire_shape() {
    let json = serde_json::to_value(parse_lyrics("    C        G\nVerse text here")).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"type": "chord", "content": "    C        G"},
            {"type": "text", "content": "Verse text here"},
        ])
    );
}
