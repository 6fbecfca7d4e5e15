//! End-to-end pipeline tests over a real temporary directory.

use std::fs;
use std::path::Path;

use shakmaty::Color;
use tempfile::TempDir;

use chessbook::document;
use chessbook::models::{BookConfig, SkipReason};
use chessbook::services::book_service;

const RUY_LOPEZ: &str = "[White \"Alice\"]\n[Black \"Bob\"]\n[Result \"1-0\"]\n\n\
                         1. e4 e5 2. Nf3 Nc6 3. Bb5 a6 1-0\n";
const SCANDINAVIAN: &str = "[White \"Carol\"]\n[Black \"Dan\"]\n\n1. e4 d5 2. exd5 Qxd5 *\n";
const ANNOTATED: &str = "[Event \"Club Night\"]\n[White \"Eve\"]\n[Black \"Frank\"]\n\n\
                         1. d4 {queen's pawn} d5 (1... Nf6 2. c4) 2. c4 e6 *\n";
const NO_MOVES: &str = "[White \"Gina\"]\n[Black \"Hal\"]\n\n*\n";
const GARBAGE: &str = "this file holds no chess whatsoever.\n";

fn write_files(dir: &Path, files: &[(&str, &str)]) {
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
}

fn small_config() -> BookConfig {
    BookConfig {
        square_size: 16,
        ..BookConfig::default()
    }
}

#[test]
fn mixed_directory_yields_dense_ordinals() {
    let dir = TempDir::new().unwrap();
    write_files(
        dir.path(),
        &[
            ("p1.pgn", RUY_LOPEZ),
            ("p2.pgn", NO_MOVES),
            ("p3.pgn", GARBAGE),
            ("p4.pgn", SCANDINAVIAN),
        ],
    );

    let build = book_service::build(dir.path(), &small_config()).unwrap();

    let ordinals: Vec<u32> = build.puzzles.iter().map(|p| p.ordinal).collect();
    assert_eq!(ordinals, vec![1, 2]);
    assert_eq!(build.skipped.len(), 2);
    assert!(matches!(build.skipped[0].reason, SkipReason::NoMoves));
    assert!(matches!(build.skipped[1].reason, SkipReason::Parse(_)));
}

#[test]
fn puzzle_and_solution_sequences_stay_parallel() {
    let dir = TempDir::new().unwrap();
    write_files(
        dir.path(),
        &[
            ("a.pgn", RUY_LOPEZ),
            ("b.pgn", SCANDINAVIAN),
            ("c.pgn", ANNOTATED),
        ],
    );

    let build = book_service::build(dir.path(), &small_config()).unwrap();

    assert_eq!(build.puzzles.len(), build.solutions.len());
    for (puzzle, solution) in build.puzzles.iter().zip(&build.solutions) {
        assert_eq!(puzzle.ordinal, solution.ordinal);
    }
}

#[test]
fn natural_order_drives_numbering() {
    // p2 holds the Ruy Lopez, p10 the Scandinavian; numeric ordering
    // must put the Ruy Lopez first even though "p10" < "p2" textually.
    let dir = TempDir::new().unwrap();
    write_files(dir.path(), &[("p10.pgn", SCANDINAVIAN), ("p2.pgn", RUY_LOPEZ)]);

    let build = book_service::build(dir.path(), &small_config()).unwrap();

    assert_eq!(build.solutions[0].ordinal, 1);
    assert!(build.solutions[0].pgn.contains("Bb5"));
    assert!(build.solutions[1].pgn.contains("Qxd5"));
}

#[test]
fn puzzle_position_is_one_ply_in() {
    let dir = TempDir::new().unwrap();
    write_files(dir.path(), &[("game.pgn", RUY_LOPEZ)]);

    let build = book_service::build(dir.path(), &small_config()).unwrap();

    // After White's opening move it is Black to move.
    assert_eq!(build.puzzles[0].to_move, Color::Black);
    assert_eq!(build.puzzles[0].caption(), "Puzzle 1 (Black to move)");
}

#[test]
fn day_banding_counts_successes_not_files() {
    let dir = TempDir::new().unwrap();
    write_files(
        dir.path(),
        &[
            ("1.pgn", RUY_LOPEZ),
            ("2.pgn", GARBAGE),
            ("3.pgn", SCANDINAVIAN),
            ("4.pgn", ANNOTATED),
        ],
    );

    let config = BookConfig {
        group_size: Some(2),
        square_size: 16,
        ..BookConfig::default()
    };
    let build = book_service::build(dir.path(), &config).unwrap();

    // The garbage file consumes neither an ordinal nor a group slot:
    // three successes band as [1, 1, 2].
    let groups: Vec<Option<u32>> = build.puzzles.iter().map(|p| p.group).collect();
    assert_eq!(groups, vec![Some(1), Some(1), Some(2)]);
}

#[test]
fn annotations_are_stripped_before_solutions() {
    let dir = TempDir::new().unwrap();
    write_files(dir.path(), &[("annotated.pgn", ANNOTATED)]);

    let build = book_service::build(dir.path(), &small_config()).unwrap();

    let pgn = &build.solutions[0].pgn;
    assert!(pgn.contains("1. d4 d5 2. c4 e6"));
    assert!(!pgn.contains('{'));
    assert!(!pgn.contains('('));
    assert!(!pgn.contains("Event"));
    assert!(pgn.contains("[White \"Eve\"]"));
}

#[test]
fn source_files_are_never_rewritten() {
    let dir = TempDir::new().unwrap();
    write_files(dir.path(), &[("annotated.pgn", ANNOTATED)]);

    book_service::build(dir.path(), &small_config()).unwrap();

    let on_disk = fs::read_to_string(dir.path().join("annotated.pgn")).unwrap();
    assert_eq!(on_disk, ANNOTATED);
}

#[test]
fn booklet_is_a_single_artifact() {
    let dir = TempDir::new().unwrap();
    write_files(dir.path(), &[("a.pgn", RUY_LOPEZ), ("b.pgn", SCANDINAVIAN)]);

    let config = small_config();
    let build = book_service::build(dir.path(), &config).unwrap();

    let out = dir.path().join("book.html");
    document::write_book(&out, "Chess Puzzle Book", &build, &config).unwrap();

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("Chess Puzzle Book"));
    assert!(html.contains("Puzzle 1"));
    assert!(html.contains("Solution 2"));
    assert!(html.contains("data:image/png;base64,"));
}

#[test]
fn unreadable_files_are_skipped_not_fatal() {
    let dir = TempDir::new().unwrap();
    write_files(dir.path(), &[("ok.pgn", RUY_LOPEZ)]);
    // Invalid UTF-8 forces a read-level failure for this candidate.
    fs::write(dir.path().join("bad.pgn"), [0xff, 0xfe, 0xfd]).unwrap();

    let build = book_service::build(dir.path(), &small_config()).unwrap();

    assert_eq!(build.puzzles.len(), 1);
    assert_eq!(build.skipped.len(), 1);
    assert!(matches!(build.skipped[0].reason, SkipReason::Unreadable(_)));
}
