//! Batch pipeline: directory scan, per-file processing, record assembly.
//!
//! Files are processed one at a time in natural order. Every per-file
//! failure becomes a logged skip that consumes no ordinal; only an
//! unusable input directory aborts the batch.

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use shakmaty::{Chess, Color, Position};
use walkdir::WalkDir;

use crate::export;
use crate::models::{BookBuild, BookConfig, PuzzleRecord, SkipReason, SkippedFile, SolutionRecord};
use crate::parser::{self, ParsedGame};
use crate::render;
use crate::utils::natural_cmp;
use crate::Result;

/// Extension recognized by the booklet pipeline.
pub const PGN_EXTENSION: &str = "pgn";

/// Candidate files with the given extension (case-insensitive), in
/// natural order. Non-recursive: only the directory itself is scanned.
pub fn candidates(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .map_or(false, |ext| ext.eq_ignore_ascii_case(extension))
        })
        .collect();

    files.sort_by(|a, b| natural_cmp(&file_name(a), &file_name(b)));
    Ok(files)
}

/// Runs the whole pipeline over `dir` and returns the aggregated build.
pub fn build(dir: &Path, config: &BookConfig) -> Result<BookBuild> {
    let files = candidates(dir, PGN_EXTENSION)?;
    let mut out = BookBuild::default();

    for path in files {
        let name = file_name(&path);
        match process_file(&path, config) {
            Ok((game, image_png, to_move)) => {
                let ordinal = out.puzzles.len() as u32 + 1;
                let group = config.group_size.map(|n| (ordinal - 1) / n + 1);
                out.puzzles.push(PuzzleRecord {
                    ordinal,
                    image_png,
                    to_move,
                    group,
                });
                out.solutions.push(SolutionRecord {
                    ordinal,
                    pgn: export::serialize(&game),
                });
            }
            Err(reason) => {
                eprintln!("{}", format!("Skipping {}: {}", name, reason).yellow());
                out.skipped.push(SkippedFile { file: name, reason });
            }
        }
    }

    Ok(out)
}

/// One file, start to finish: read, sanitize, parse, apply the opening
/// ply, render. All state is local to the call.
fn process_file(
    path: &Path,
    config: &BookConfig,
) -> Result<(ParsedGame, Vec<u8>, Color), SkipReason> {
    let raw = fs::read_to_string(path)?;
    let text = if config.sanitize {
        parser::sanitize(&raw)
    } else {
        raw
    };

    let game = parser::parse(&text)?;
    let first = game.moves.first().ok_or(SkipReason::NoMoves)?;

    // The puzzle is everything after the opening move: show the board
    // with exactly one ply applied.
    let mut pos = Chess::default();
    pos.play_unchecked(first);

    let image_png = render::board_png(pos.board(), config.square_size)?;
    let to_move = pos.turn();

    Ok((game, image_png, to_move))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn candidates_filter_by_extension_case_insensitively() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.pgn"), "x").unwrap();
        fs::write(dir.path().join("b.PGN"), "x").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let files = candidates(dir.path(), PGN_EXTENSION).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn candidates_come_back_in_natural_order() {
        let dir = TempDir::new().unwrap();
        for name in ["p10.pgn", "p1.pgn", "p2.pgn"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }

        let files = candidates(dir.path(), PGN_EXTENSION).unwrap();
        let names: Vec<String> = files.iter().map(|p| file_name(p)).collect();
        assert_eq!(names, vec!["p1.pgn", "p2.pgn", "p10.pgn"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("nope");
        assert!(candidates(&gone, PGN_EXTENSION).is_err());
    }

    #[test]
    fn subdirectories_are_not_scanned() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("deep.pgn"), "x").unwrap();
        fs::write(dir.path().join("top.pgn"), "x").unwrap();

        let files = candidates(dir.path(), PGN_EXTENSION).unwrap();
        assert_eq!(files.len(), 1);
    }
}
