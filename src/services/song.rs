//! In-memory song library.
//!
//! Owns song records and their lifecycle, and runs the lyric engine over them
//! for the detail and transpose views. Safe to share across threads behind an
//! `Arc`.

use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::lyrics::{parse_lyrics, transpose_song};
use crate::services::validation::{
    validate_create, validate_search, validate_semitones, validate_update,
};
use crate::types::{
    Song, SongCreateRequest, SongDetail, SongId, SongSearchParams, SongSummary, SongUpdateRequest,
    TransposedSong,
};

#[derive(Debug)]
struct Store {
    songs: Vec<Song>,
    next_id: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self { songs: Vec::new(), next_id: 1 }
    }
}

impl Store {
    fn find(&self, id: &SongId) -> Result<&Song> {
        self.songs
            .iter()
            .find(|s| &s.id == id)
            .ok_or_else(|| Error::not_found(id.as_str()))
    }

    fn find_mut(&mut self, id: &SongId) -> Result<&mut Song> {
        self.songs
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or_else(|| Error::not_found(id.as_str()))
    }

    fn allocate_id(&mut self) -> Result<SongId> {
        let next = self
            .next_id
            .checked_add(1)
            .ok_or_else(|| Error::validation("id", "no song ids left to allocate"))?;
        let id = SongId::new(self.next_id.to_string());
        self.next_id = next;
        Ok(id)
    }
}

/// Empty optional strings are stored as "no value".
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Case-insensitive substring test against an already lowercased needle.
fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Lowercased filter value, or `None` if the filter is absent or empty.
fn filter_term(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(|v| v.to_lowercase())
}

/// Thread-safe in-memory store of songs.
#[derive(Debug, Default)]
pub struct SongLibrary {
    store: RwLock<Store>,
}

impl SongLibrary {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a library seeded from the configured songbook, if any.
    pub fn from_config(config: &Config) -> Result<Self> {
        let library = Self::new();
        if let Some(path) = &config.songbook_path {
            library.load_json(path)?;
        }
        Ok(library)
    }

    fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of stored songs.
    pub fn len(&self) -> usize {
        self.read().songs.len()
    }

    /// Whether the library holds no songs.
    pub fn is_empty(&self) -> bool {
        self.read().songs.is_empty()
    }

    /// Add a new song.
    pub fn create(&self, req: SongCreateRequest) -> Result<Song> {
        validate_create(&req).inspect_err(|e| tracing::warn!("Rejected song create: {e}"))?;

        let now = Utc::now();
        let mut store = self.write();
        let song = Song {
            id: store.allocate_id()?,
            title: req.title,
            artist: req.artist,
            lyrics: req.lyrics,
            original_key: non_empty(req.original_key),
            category: non_empty(req.category),
            date_created: now,
            date_modified: now,
        };
        store.songs.push(song.clone());

        tracing::info!(id = %song.id, title = %song.title, "Created song");
        Ok(song)
    }

    /// All songs in insertion order.
    pub fn list(&self) -> Vec<SongSummary> {
        self.read().songs.iter().map(SongSummary::from).collect()
    }

    /// Fetch one song.
    pub fn get(&self, id: &SongId) -> Result<Song> {
        self.read().find(id).cloned()
    }

    /// Fetch one song with its lyrics classified for display.
    pub fn get_detail(&self, id: &SongId) -> Result<SongDetail> {
        let song = self.get(id)?;
        let formatted_lyrics = parse_lyrics(&song.lyrics);
        Ok(SongDetail { song, formatted_lyrics })
    }

    /// Apply the fields present in `req`.
    pub fn update(&self, req: SongUpdateRequest) -> Result<Song> {
        validate_update(&req).inspect_err(|e| tracing::warn!("Rejected song update: {e}"))?;

        let mut store = self.write();
        let song = store.find_mut(&req.id)?;

        if let Some(title) = req.title {
            song.title = title;
        }
        if let Some(artist) = req.artist {
            song.artist = artist;
        }
        if let Some(lyrics) = req.lyrics {
            song.lyrics = lyrics;
        }
        if let Some(original_key) = req.original_key {
            song.original_key = non_empty(original_key);
        }
        if let Some(category) = req.category {
            song.category = non_empty(category);
        }
        song.date_modified = Utc::now();

        tracing::info!(id = %song.id, "Updated song");
        Ok(song.clone())
    }

    /// Remove a song.
    pub fn delete(&self, id: &SongId) -> Result<()> {
        let mut store = self.write();
        let index = store
            .songs
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| Error::not_found(id.as_str()))?;
        store.songs.remove(index);

        tracing::info!(%id, "Deleted song");
        Ok(())
    }

    /// Songs matching every non-empty filter in `params`.
    ///
    /// `query` matches title, artist, lyrics or category; the other filters
    /// each match their own field. All comparisons are case-insensitive
    /// substring matches.
    pub fn search(&self, params: &SongSearchParams) -> Result<Vec<SongSummary>> {
        validate_search(params).inspect_err(|e| tracing::warn!("Rejected song search: {e}"))?;

        let query = filter_term(params.query.as_ref());
        let title = filter_term(params.title.as_ref());
        let artist = filter_term(params.artist.as_ref());
        let category = filter_term(params.category.as_ref());
        let lyrics = filter_term(params.lyrics.as_ref());

        let category_matches = |song: &Song, term: &str| {
            song.category.as_deref().is_some_and(|c| contains_ci(c, term))
        };

        let results: Vec<SongSummary> = self
            .read()
            .songs
            .iter()
            .filter(|song| {
                query.as_deref().is_none_or(|q| {
                    contains_ci(&song.title, q)
                        || contains_ci(&song.artist, q)
                        || contains_ci(&song.lyrics, q)
                        || category_matches(song, q)
                })
            })
            .filter(|song| title.as_deref().is_none_or(|t| contains_ci(&song.title, t)))
            .filter(|song| artist.as_deref().is_none_or(|a| contains_ci(&song.artist, a)))
            .filter(|song| category.as_deref().is_none_or(|c| category_matches(song, c)))
            .filter(|song| lyrics.as_deref().is_none_or(|l| contains_ci(&song.lyrics, l)))
            .map(SongSummary::from)
            .collect();

        tracing::debug!(?params, hits = results.len(), "Searched songs");
        Ok(results)
    }

    /// Transpose a song's chords and key by `semitones` (`-11..=11`).
    ///
    /// The stored record is not changed.
    pub fn transpose(&self, id: &SongId, semitones: i32) -> Result<TransposedSong> {
        let song = self.get(id)?;
        validate_semitones(semitones)
            .inspect_err(|e| tracing::warn!(%id, "Rejected transpose: {e}"))?;

        let transposed = transpose_song(&song.lyrics, song.original_key.as_deref(), semitones);
        tracing::debug!(
            %id,
            semitones,
            key = ?transposed.transposed_key,
            "Transposed song"
        );

        Ok(TransposedSong {
            id: song.id,
            title: song.title,
            artist: song.artist,
            lyrics: transposed.lyrics,
            original_key: song.original_key,
            transposed_key: transposed.transposed_key,
            category: song.category,
            date_created: song.date_created,
            date_modified: song.date_modified,
            formatted_lyrics: transposed.formatted_lyrics,
        })
    }

    /// Replace the library contents with the songs in a JSON songbook.
    ///
    /// New ids continue after the highest numeric id in the file.
    pub fn load_json(&self, path: &Path) -> Result<usize> {
        let data = fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
        let songs: Vec<Song> = serde_json::from_str(&data)
            .map_err(|e| Error::parse(e.to_string(), path.to_path_buf()))?;

        let next_id = match songs.iter().filter_map(|s| s.id.as_str().parse::<u64>().ok()).max() {
            None => 1,
            Some(max) => max.checked_add(1).ok_or_else(|| {
                Error::parse(format!("song id {max} leaves no room for new ids"), path.to_path_buf())
            })?,
        };

        let count = songs.len();
        *self.write() = Store { songs, next_id };

        tracing::info!("Loaded {count} songs from {}", path.display());
        Ok(count)
    }

    /// Write every song to `path` as pretty-printed JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.read().songs)?;
        fs_err::write(path, json).map_err(|e| Error::io(e, path.to_path_buf()))?;

        tracing::info!("Saved {} songs to {}", self.len(), path.display());
        Ok(())
    }
}
