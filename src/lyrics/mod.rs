//! Lyric processing: chord-line detection, display formatting and
//! transposition of whole lyric bodies.
//!
//! Lyrics are plain text where chord lines sit above the words they belong
//! to, aligned with spaces:
//!
//! ```text
//!     G        C
//! Amazing grace
//! ```
//!
//! Every function here is pure and works one line at a time, top to bottom.

mod classify;
mod detect;
mod format;
mod transpose;

pub use classify::{classify_line, is_chord_line};
pub use detect::detect_original_key;
pub use format::parse_lyrics;
pub use transpose::{transpose_chord_line, transpose_lyrics, transpose_song};

// Allow unwrap for compile-time constant regex patterns in lazy_static blocks
#[allow(clippy::unwrap_used)]
mod patterns {
    use lazy_static::lazy_static;
    use regex::Regex;

    /// One chord token: root, optional accidental, then word characters or slashes.
    const TOKEN: &str = r"[A-G][#b]?[A-Za-z0-9_/]*";

    lazy_static! {
        /// A line made up only of whitespace-separated chord tokens.
        pub static ref CHORD_LINE: Regex =
            Regex::new(&format!(r"^\s*{TOKEN}(?:\s+{TOKEN})*\s*$")).unwrap();

        /// A single chord token anywhere in a line.
        pub static ref CHORD_TOKEN: Regex = Regex::new(TOKEN).unwrap();
    }
}
