//! Request validation for the song library.
//!
//! Limits are counted in characters, not bytes.

use crate::constants::limits::{
    MAX_ARTIST_LEN, MAX_CATEGORY_LEN, MAX_KEY_LEN, MAX_LYRICS_LEN, MAX_SEMITONES, MAX_TITLE_LEN,
    MAX_SEARCH_TERM_LEN, MIN_SEMITONES,
};
use crate::error::{Error, Result};
use crate::types::{SongCreateRequest, SongSearchParams, SongUpdateRequest};

/// A required field must be non-empty and at most `max` characters.
fn required(field: &'static str, value: &str, max: usize) -> Result<()> {
    if value.is_empty() {
        return Err(Error::validation(field, "is required"));
    }
    at_most(field, value, max)
}

fn at_most(field: &'static str, value: &str, max: usize) -> Result<()> {
    if value.chars().count() > max {
        return Err(Error::validation(field, format!("must be at most {max} characters")));
    }
    Ok(())
}

fn optional(field: &'static str, value: Option<&str>, max: usize) -> Result<()> {
    value.map_or(Ok(()), |v| at_most(field, v, max))
}

/// Check all fields of a create request.
pub fn validate_create(req: &SongCreateRequest) -> Result<()> {
    required("title", &req.title, MAX_TITLE_LEN)?;
    required("artist", &req.artist, MAX_ARTIST_LEN)?;
    required("lyrics", &req.lyrics, MAX_LYRICS_LEN)?;
    optional("originalKey", req.original_key.as_deref(), MAX_KEY_LEN)?;
    optional("category", req.category.as_deref(), MAX_CATEGORY_LEN)
}

/// Check the fields present in an update request.
pub fn validate_update(req: &SongUpdateRequest) -> Result<()> {
    if req.id.as_str().is_empty() {
        return Err(Error::validation("id", "is required"));
    }
    if let Some(title) = &req.title {
        required("title", title, MAX_TITLE_LEN)?;
    }
    if let Some(artist) = &req.artist {
        required("artist", artist, MAX_ARTIST_LEN)?;
    }
    if let Some(lyrics) = &req.lyrics {
        required("lyrics", lyrics, MAX_LYRICS_LEN)?;
    }
    optional("originalKey", req.original_key.as_ref().and_then(Option::as_deref), MAX_KEY_LEN)?;
    optional("category", req.category.as_ref().and_then(Option::as_deref), MAX_CATEGORY_LEN)
}

/// Check search filter lengths. Absent and empty filters always pass.
pub fn validate_search(params: &SongSearchParams) -> Result<()> {
    optional("query", params.query.as_deref(), MAX_SEARCH_TERM_LEN)?;
    optional("title", params.title.as_deref(), MAX_TITLE_LEN)?;
    optional("artist", params.artist.as_deref(), MAX_ARTIST_LEN)?;
    optional("category", params.category.as_deref(), MAX_CATEGORY_LEN)?;
    optional("lyrics", params.lyrics.as_deref(), MAX_SEARCH_TERM_LEN)
}

/// Transposition offsets must lie in `-11..=11`.
pub fn validate_semitones(semitones: i32) -> Result<()> {
    if (MIN_SEMITONES..=MAX_SEMITONES).contains(&semitones) {
        Ok(())
    } else {
        Err(Error::validation(
            "semitones",
            format!("must be between {MIN_SEMITONES} and {MAX_SEMITONES}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn request() -> SongCreateRequest {
        SongCreateRequest {
            title: "Amazing Grace".to_string(),
            artist: "John Newton".to_string(),
            lyrics: "    G        C\nAmazing grace".to_string(),
            original_key: Some("G".to_string()),
            category: None,
        }
    }

    #[test]
    fn test_valid_create() {
        assert!(validate_create(&request()).is_ok());
    }

    #[test]
    fn test_missing_title() {
        let req = SongCreateRequest { title: String::new(), ..request() };
        match validate_create(&req) {
            Err(Error::Validation { field, .. }) => assert_eq!(field, "title"),
            other => panic!("Expected title validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_limits_count_characters() {
        let req = SongCreateRequest { title: "é".repeat(MAX_TITLE_LEN), ..request() };
        assert!(validate_create(&req).is_ok());

        let req = SongCreateRequest { original_key: Some("C#m7b5add9/G#".to_string()), ..request() };
        assert!(validate_create(&req).is_err());
    }

    #[test]
    fn test_update_allows_clearing_key() {
        let mut req = SongUpdateRequest::new("1");
        req.original_key = Some(None);
        assert!(validate_update(&req).is_ok());

        req.title = Some(String::new());
        assert!(validate_update(&req).is_err());
    }

    #[test]
    fn test_search_limits() {
        let params = SongSearchParams {
            query: Some("q".repeat(MAX_SEARCH_TERM_LEN)),
            category: Some("Hymn".to_string()),
            ..Default::default()
        };
        assert!(validate_search(&params).is_ok());
        assert!(validate_search(&SongSearchParams::default()).is_ok());

        let params = SongSearchParams { category: Some("c".repeat(51)), ..Default::default() };
        match validate_search(&params) {
            Err(Error::Validation { field, .. }) => assert_eq!(field, "category"),
            other => panic!("Expected category validation error, got {other:?}"),
        }

        let params = SongSearchParams { lyrics: Some("l".repeat(201)), ..Default::default() };
        assert!(validate_search(&params).is_err());
    }

    #[test]
    fn test_semitone_range() {
        assert!(validate_semitones(-11).is_ok());
        assert!(validate_semitones(0).is_ok());
        assert!(validate_semitones(11).is_ok());
        assert!(validate_semitones(12).is_err());
        assert!(validate_semitones(-12).is_err());
    }
}
