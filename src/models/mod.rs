pub mod config;
pub mod record;
pub mod report;

pub use config::{BookConfig, PageBreakPolicy};
pub use record::{side_name, PuzzleRecord, SolutionRecord};
pub use report::{BookBuild, SkipReason, SkippedFile};
