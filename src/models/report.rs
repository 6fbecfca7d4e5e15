//! Per-file outcomes and the aggregated batch result.

use crate::models::{PuzzleRecord, SolutionRecord};
use crate::parser::ParseError;
use crate::render::RenderError;

/// Why a candidate file produced no puzzle. Always file-local: the
/// batch continues and the file consumes no ordinal.
#[derive(Debug, thiserror::Error)]
pub enum SkipReason {
    #[error("cannot read file: {0}")]
    Unreadable(#[from] std::io::Error),

    #[error("empty or invalid PGN: {0}")]
    Parse(#[from] ParseError),

    #[error("no moves found")]
    NoMoves,

    #[error("board rendering failed: {0}")]
    Render(#[from] RenderError),
}

#[derive(Debug)]
pub struct SkippedFile {
    pub file: String,
    pub reason: SkipReason,
}

/// Everything one batch run produced: the two parallel record
/// sequences plus the diagnostics list.
#[derive(Debug, Default)]
pub struct BookBuild {
    pub puzzles: Vec<PuzzleRecord>,
    pub solutions: Vec<SolutionRecord>,
    pub skipped: Vec<SkippedFile>,
}
