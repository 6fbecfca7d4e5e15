//! Sequential renaming of source files.
//!
//! A maintenance utility that assigns zero-padded names (`001.pgn`,
//! `002.pgn`, ...) in the same natural order the booklet pipeline uses,
//! so the two tools can never disagree about numbering. Renaming is
//! two-phase: every source first moves to a unique temporary name, then
//! temporaries move to their final names, so an overlap between old and
//! new names cannot destroy a file.

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::services::book_service::candidates;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameStep {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Maps the candidate files of `dir` onto zero-padded sequential names.
/// Files already carrying their target name are left out of the plan.
pub fn plan(dir: &Path, extension: &str, padding: usize) -> Result<Vec<RenameStep>> {
    let files = candidates(dir, extension)?;

    let steps = files
        .into_iter()
        .enumerate()
        .map(|(idx, from)| {
            let target = format!("{:0width$}.{}", idx + 1, extension, width = padding);
            let to = dir.join(target);
            RenameStep { from, to }
        })
        .filter(|step| step.from != step.to)
        .collect();

    Ok(steps)
}

/// Executes a rename plan. Returns the number of files renamed.
pub fn apply(steps: &[RenameStep]) -> Result<usize> {
    let mut staged: Vec<(PathBuf, &RenameStep)> = Vec::with_capacity(steps.len());

    for (idx, step) in steps.iter().enumerate() {
        let tmp = step.from.with_extension(format!("rename-{}.tmp", idx));
        fs::rename(&step.from, &tmp)?;
        staged.push((tmp, step));
    }

    for (tmp, step) in &staged {
        fs::rename(tmp, &step.to)?;
        println!(
            "Renamed: {} → {}",
            step.from
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .yellow(),
            step.to
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .green()
        );
    }

    Ok(staged.len())
}
