//! Song library behavior across a JSON songbook file.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::sync::Arc;
use std::thread;

use chordbook::error::Error;
use chordbook::services::SongLibrary;
use chordbook::types::{SongCreateRequest, SongId};

fn request(title: &str, lyrics: &str, key: Option<&str>) -> SongCreateRequest {
    SongCreateRequest {
        title: title.to_string(),
        artist: "Traditional".to_string(),
        lyrics: lyrics.to_string(),
        original_key: key.map(str::to_string),
        category: Some("Hymn".to_string()),
    }
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("songbook.json");

    let lib = SongLibrary::new();
    lib.create(request("Amazing Grace", "    G        C\nAmazing grace", Some("G"))).unwrap();
    lib.create(request("Be Thou My Vision", "  D   G\nBe thou my vision", None)).unwrap();
    lib.save_json(&path).unwrap();

    let loaded = SongLibrary::new();
    assert_eq!(loaded.load_json(&path).unwrap(), 2);
    assert_eq!(loaded.list(), lib.list());

    // ids continue after the highest loaded id
    let next = loaded.create(request("Doxology", "C\nPraise God", None)).unwrap();
    assert_eq!(next.id, SongId::new("3"));
}

#[test]
fn loading_a_malformed_songbook_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let lib = SongLibrary::new();
    assert!(matches!(lib.load_json(&path), Err(Error::Parse { .. })));
    assert!(matches!(lib.load_json(&dir.path().join("missing.json")), Err(Error::Io { .. })));
}

#[test]
fn io_errors_carry_the_songbook_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let unwritable = dir.path().join("no_such_dir").join("songbook.json");

    let lib = SongLibrary::new();
    match lib.load_json(&missing) {
        Err(Error::Io { path, .. }) => assert_eq!(path.as_deref(), Some(missing.as_path())),
        other => panic!("Expected Io error, got {other:?}"),
    }
    match lib.save_json(&unwritable) {
        Err(Error::Io { path, .. }) => assert_eq!(path.as_deref(), Some(unwritable.as_path())),
        other => panic!("Expected Io error, got {other:?}"),
    }
}

fn songbook_with_id(id: &str) -> String {
    format!(
        r#"[{{"id":"{id}","title":"Doxology","artist":"Thomas Ken","lyrics":"G\nPraise God",
            "originalKey":"G","category":null,
            "dateCreated":"2024-01-01T00:00:00Z","dateModified":"2024-01-01T00:00:00Z"}}]"#
    )
}

#[test]
fn highest_possible_id_is_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("songbook.json");
    std::fs::write(&path, songbook_with_id(&u64::MAX.to_string())).unwrap();

    let lib = SongLibrary::new();
    assert!(matches!(lib.load_json(&path), Err(Error::Parse { .. })));
    assert!(lib.is_empty());
}

#[test]
fn exhausted_ids_fail_create_instead_of_wrapping() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("songbook.json");
    std::fs::write(&path, songbook_with_id(&(u64::MAX - 1).to_string())).unwrap();

    let lib = SongLibrary::new();
    assert_eq!(lib.load_json(&path).unwrap(), 1);
    assert!(matches!(
        lib.create(request("Gloria Patri", "C\nGlory be", None)),
        Err(Error::Validation { field: "id", .. })
    ));
    assert_eq!(lib.len(), 1);
}

#[test]
fn concurrent_transposes_of_one_song() {
    let lib = Arc::new(SongLibrary::new());
    let song = lib.create(request("Amazing Grace", "    G        C\nAmazing grace", Some("G"))).unwrap();

    let handles: Vec<_> = (-11..=11)
        .map(|n| {
            let lib = Arc::clone(&lib);
            let id = song.id.clone();
            thread::spawn(move || (n, lib.transpose(&id, n).unwrap()))
        })
        .collect();

    for handle in handles {
        let (n, out) = handle.join().unwrap();
        assert_eq!(out.transposed_key, Some(chordbook::transpose_chord("G", n)));
        assert_eq!(out.lyrics.split('\n').count(), 2);
    }
    assert_eq!(lib.get(&song.id).unwrap().lyrics, song.lyrics);
}
