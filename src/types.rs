//! Core type definitions for songs and structured lyrics.
//!
//! Wire shapes use camelCase field names so they can be handed straight to a
//! JSON API layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Classification of a single lyric line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Only chord tokens separated by whitespace.
    Chord,
    /// Any other non-blank line.
    Text,
    /// Blank or whitespace-only line.
    Empty,
}

impl LineKind {
    /// Returns the wire name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chord => "chord",
            Self::Text => "text",
            Self::Empty => "empty",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One classified line of a lyric document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LyricLine {
    /// Line classification.
    #[serde(rename = "type")]
    pub kind: LineKind,
    /// Original line text; blank for `Empty` lines.
    pub content: String,
}

impl LyricLine {
    /// Create a line of the given kind.
    pub fn new(kind: LineKind, content: impl Into<String>) -> Self {
        Self { kind, content: content.into() }
    }

    /// An empty line. Content is always blank.
    pub const fn empty() -> Self {
        Self { kind: LineKind::Empty, content: String::new() }
    }
}

/// Song record identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongId(pub String);

impl SongId {
    /// Create a new `SongId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SongId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SongId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for SongId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A stored song.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Record id.
    pub id: SongId,
    /// Song title.
    pub title: String,
    /// Performing or writing artist.
    pub artist: String,
    /// Lyrics with chord lines above the text.
    pub lyrics: String,
    /// Key the lyrics are written in, if known.
    pub original_key: Option<String>,
    /// Free-form category (Hymn, Worship, ...).
    pub category: Option<String>,
    /// When the record was created.
    pub date_created: DateTime<Utc>,
    /// When the record was last changed.
    pub date_modified: DateTime<Utc>,
}

/// Row returned by list and search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongSummary {
    /// Record id.
    pub id: SongId,
    /// Song title.
    pub title: String,
    /// Artist.
    pub artist: String,
    /// Original key, if known.
    pub original_key: Option<String>,
    /// Category, if any.
    pub category: Option<String>,
    /// Creation time.
    pub date_created: DateTime<Utc>,
}

impl From<&Song> for SongSummary {
    fn from(song: &Song) -> Self {
        Self {
            id: song.id.clone(),
            title: song.title.clone(),
            artist: song.artist.clone(),
            original_key: song.original_key.clone(),
            category: song.category.clone(),
            date_created: song.date_created,
        }
    }
}

/// A song together with its lyrics split into classified lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongDetail {
    /// The stored record.
    #[serde(flatten)]
    pub song: Song,
    /// `song.lyrics` classified line by line.
    pub formatted_lyrics: Vec<LyricLine>,
}

/// A song with its chords shifted by some number of semitones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransposedSong {
    /// Record id.
    pub id: SongId,
    /// Song title.
    pub title: String,
    /// Artist.
    pub artist: String,
    /// Transposed lyrics.
    pub lyrics: String,
    /// Stored key, unchanged.
    pub original_key: Option<String>,
    /// Key after transposition, stored or detected.
    pub transposed_key: Option<String>,
    /// Category, unchanged.
    pub category: Option<String>,
    /// Creation time, unchanged.
    pub date_created: DateTime<Utc>,
    /// Modification time, unchanged.
    pub date_modified: DateTime<Utc>,
    /// Transposed lyrics classified line by line.
    pub formatted_lyrics: Vec<LyricLine>,
}

/// Result of transposing a lyric body on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransposedLyrics {
    /// Transposed lyric text.
    pub lyrics: String,
    /// Key after transposition, if one was given or detected.
    pub transposed_key: Option<String>,
    /// Transposed lyrics classified line by line.
    pub formatted_lyrics: Vec<LyricLine>,
}

/// Fields for a new song.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongCreateRequest {
    /// Song title.
    pub title: String,
    /// Artist.
    pub artist: String,
    /// Lyrics with chords.
    pub lyrics: String,
    /// Original key.
    #[serde(default)]
    pub original_key: Option<String>,
    /// Category.
    #[serde(default)]
    pub category: Option<String>,
}

/// Partial update of a song. `None` leaves a field alone; for the nullable
/// fields `Some(None)` clears the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongUpdateRequest {
    /// Song to update.
    pub id: SongId,
    /// New title.
    #[serde(default)]
    pub title: Option<String>,
    /// New artist.
    #[serde(default)]
    pub artist: Option<String>,
    /// New lyrics.
    #[serde(default)]
    pub lyrics: Option<String>,
    /// New original key, or `Some(None)` to clear it.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub original_key: Option<Option<String>>,
    /// New category, or `Some(None)` to clear it.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub category: Option<Option<String>>,
}

impl SongUpdateRequest {
    /// An update for `id` that changes nothing yet.
    pub fn new(id: impl Into<SongId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            artist: None,
            lyrics: None,
            original_key: None,
            category: None,
        }
    }
}

/// Search filters. Every non-empty filter narrows the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SongSearchParams {
    /// Matches title, artist, lyrics or category.
    pub query: Option<String>,
    /// Title filter.
    pub title: Option<String>,
    /// Artist filter.
    pub artist: Option<String>,
    /// Category filter.
    pub category: Option<String>,
    /// Lyrics filter.
    pub lyrics: Option<String>,
}

/// Distinguishes an explicit `null` from a missing field.
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
