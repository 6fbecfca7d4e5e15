//! Pipeline configuration.
//!
//! One configuration value set replaces the old per-variant entry
//! points: cleanup toggle, optional day banding, page-break placement,
//! and diagram scale.

use crate::render;

/// Where page breaks go in the assembled booklet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PageBreakPolicy {
    /// A fresh page after every puzzle
    PerPuzzle,
    /// A fresh page only after the last puzzle of each group
    PerGroup,
}

#[derive(Debug, Clone)]
pub struct BookConfig {
    /// Strip comments, variations, and unwanted headers before parsing
    pub sanitize: bool,
    /// Emit a "Day N" heading every N puzzles; `None` disables banding
    pub group_size: Option<u32>,
    pub page_breaks: PageBreakPolicy,
    /// Board diagram square size in pixels
    pub square_size: u32,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            sanitize: true,
            group_size: None,
            page_breaks: PageBreakPolicy::PerPuzzle,
            square_size: render::DEFAULT_SQUARE_SIZE,
        }
    }
}
