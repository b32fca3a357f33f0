//! Application constants.
//!
//! Centralizes musical tables and request limits.

/// Chromatic scale and enharmonic tables.
pub mod music {
    /// Number of semitones in an octave.
    pub const SEMITONES_PER_OCTAVE: i32 = 12;

    /// Sharp-spelled chromatic scale starting at C.
    pub const NOTES: [&str; 12] = [
        "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
    ];

    /// Flat root spellings and their sharp equivalents.
    pub const FLAT_TO_SHARP: [(&str, &str); 5] = [
        ("Db", "C#"),
        ("Eb", "D#"),
        ("Gb", "F#"),
        ("Ab", "G#"),
        ("Bb", "A#"),
    ];
}

/// Song record limits, counted in characters.
pub mod limits {
    /// Maximum title length.
    pub const MAX_TITLE_LEN: usize = 200;

    /// Maximum artist length.
    pub const MAX_ARTIST_LEN: usize = 100;

    /// Maximum lyrics length.
    pub const MAX_LYRICS_LEN: usize = 5000;

    /// Maximum original key length.
    pub const MAX_KEY_LEN: usize = 10;

    /// Maximum category length.
    pub const MAX_CATEGORY_LEN: usize = 50;

    /// Maximum length of a free-text search filter (query or lyrics).
    pub const MAX_SEARCH_TERM_LEN: usize = 200;

    /// Smallest accepted transposition offset.
    pub const MIN_SEMITONES: i32 = -11;

    /// Largest accepted transposition offset.
    pub const MAX_SEMITONES: i32 = 11;
}

/// Songbook file locations.
pub mod songbook {
    /// Directory name under the platform data dir.
    pub const DATA_DIR_NAME: &str = "chordbook";

    /// Default songbook file name.
    pub const FILE_NAME: &str = "songbook.json";
}
