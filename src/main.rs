//! `Chordbook` command-line tool.
//!
//! Usage:
//!   `chordbook transpose <file> [semitones]`
//!   `chordbook format <file> [--json]`
//!   `chordbook key <file>`
//!   `chordbook interval <from> <to>`
//!   `chordbook list`

use std::env;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use chordbook::config::Config;
use chordbook::lyrics::{detect_original_key, parse_lyrics, transpose_song};
use chordbook::services::validation::validate_semitones;
use chordbook::services::SongLibrary;
use chordbook::calculate_interval;

const USAGE: &str = "\
Usage: chordbook <command> [args]

Commands:
  transpose <file> [semitones]   Transpose chord lines (default from CHORDBOOK_DEFAULT_SEMITONES)
  format <file> [--json]         Show how each line is classified
  key <file>                     Print the key detected from the first chord line
  interval <from> <to>           Semitones up from one key to another
  list                           List songs in the configured songbook";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first() else {
        eprintln!("{USAGE}");
        std::process::exit(1);
    };

    run(command, &args[1..])
}

/// Configuration is only needed by commands that use defaults or the songbook.
fn load_config() -> Result<Config> {
    let config = Config::load()?;
    tracing::debug!(?config, "Loaded configuration");
    Ok(config)
}

fn run(command: &str, args: &[String]) -> Result<()> {
    match (command, args) {
        ("transpose", [file, rest @ ..]) => {
            let semitones = match rest.first() {
                Some(raw) => raw
                    .parse::<i32>()
                    .with_context(|| format!("semitones must be a whole number, got {raw:?}"))?,
                None => load_config()?.default_semitones,
            };
            validate_semitones(semitones)?;

            let lyrics = read_lyrics(file)?;
            let out = transpose_song(&lyrics, None, semitones);
            println!("{}", out.lyrics);
            eprintln!("Key: {}", out.transposed_key.as_deref().unwrap_or("(none)"));
        }
        ("format", [file, rest @ ..]) => {
            let lines = parse_lyrics(&read_lyrics(file)?);
            if rest.iter().any(|a| a == "--json") {
                println!("{}", serde_json::to_string_pretty(&lines)?);
            } else {
                for line in &lines {
                    println!("{:<5} | {}", line.kind, line.content);
                }
            }
        }
        ("key", [file]) => {
            let lyrics = read_lyrics(file)?;
            println!("{}", detect_original_key(&lyrics).as_deref().unwrap_or("(none)"));
        }
        ("interval", [from, to]) => {
            println!("{}", calculate_interval(from, to));
        }
        ("list", []) => {
            let library = SongLibrary::from_config(&load_config()?)?;
            if library.is_empty() {
                println!("No songs. Set CHORDBOOK_LIBRARY to a JSON songbook.");
            }
            for song in library.list() {
                println!(
                    "{:>4}  {}  by {}  [{}]",
                    song.id,
                    song.title,
                    song.artist,
                    song.original_key.as_deref().unwrap_or("-")
                );
            }
        }
        _ => bail!("unrecognized command\n\n{USAGE}"),
    }

    Ok(())
}

fn read_lyrics(file: &str) -> Result<String> {
    let path = Path::new(file);
    fs_err::read_to_string(path).with_context(|| format!("reading lyrics from {}", path.display()))
}
