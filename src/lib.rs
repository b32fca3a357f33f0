//! `Chordbook` - song library with chord transposition.
//!
//! The core is a pure lyric engine: it finds chord lines in free-form lyric
//! text, transposes chord tokens along the chromatic scale, and classifies
//! lines for display. [`services::SongLibrary`] keeps song records and runs
//! the engine over them.

pub mod chord;
pub mod config;
pub mod constants;
pub mod error;
pub mod lyrics;
pub mod services;
pub mod types;

pub use chord::{calculate_interval, transpose_chord};
pub use lyrics::{classify_line, detect_original_key, parse_lyrics, transpose_lyrics};
