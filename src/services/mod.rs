//! Song record management built on the lyric engine.
//!
//! This is the layer an HTTP API would wrap: it validates requests, keeps
//! records, and maps missing records to `NotFound`.

pub mod song;
pub mod validation;

pub use song::SongLibrary;
