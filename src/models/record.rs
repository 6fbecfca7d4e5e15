//! Records handed to the document assembler.

use shakmaty::Color;

/// One puzzle page: the diagram after the opening move, whose turn it
/// is, and the 1-based day band when banding is enabled.
#[derive(Debug, Clone)]
pub struct PuzzleRecord {
    pub ordinal: u32,
    pub image_png: Vec<u8>,
    pub to_move: Color,
    pub group: Option<u32>,
}

impl PuzzleRecord {
    pub fn caption(&self) -> String {
        format!("Puzzle {} ({} to move)", self.ordinal, side_name(self.to_move))
    }
}

/// One answer-key entry, paired to its puzzle by ordinal.
#[derive(Debug, Clone)]
pub struct SolutionRecord {
    pub ordinal: u32,
    pub pgn: String,
}

impl SolutionRecord {
    pub fn caption(&self) -> String {
        format!("Solution {}", self.ordinal)
    }
}

pub fn side_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}
