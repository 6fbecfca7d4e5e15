//! `chessbook rename` - zero-padded sequential names, natural order.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;

use crate::services::rename_service;
use crate::Result;

#[derive(Args)]
pub struct RenameArgs {
    /// Directory containing the files to rename
    pub dir: PathBuf,

    /// File extension to match (case-insensitive)
    #[arg(long, default_value = "pgn")]
    pub extension: String,

    /// Width of the zero-padded index
    #[arg(long, default_value_t = 3)]
    pub padding: usize,

    /// Show the plan without renaming anything
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: RenameArgs) -> Result<()> {
    let steps = rename_service::plan(&args.dir, &args.extension, args.padding)?;

    if steps.is_empty() {
        println!("{}", "Nothing to rename.".yellow());
        return Ok(());
    }

    if args.dry_run {
        for step in &steps {
            println!(
                "Would rename: {} → {}",
                step.from.file_name().unwrap_or_default().to_string_lossy(),
                step.to.file_name().unwrap_or_default().to_string_lossy()
            );
        }
        return Ok(());
    }

    let renamed = rename_service::apply(&steps)?;
    println!("{}", format!("Renamed {} file(s).", renamed).green());
    Ok(())
}
