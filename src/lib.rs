// Chessbook - PGN puzzle booklet generator
// Converts a folder of chess game records into a printable puzzle book:
// one diagram per game (position after the opening move) plus an answer key.

pub mod cli;
pub mod document;
pub mod export;
pub mod models;
pub mod parser;
pub mod render;
pub mod services;
pub mod utils;

pub use anyhow::{Context, Result};

// Re-export commonly used types
pub use models::{BookBuild, BookConfig, PageBreakPolicy, PuzzleRecord, SolutionRecord};
pub use parser::{ParseError, ParsedGame};
