//! `chessbook build` - run the booklet pipeline over a directory.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::document;
use crate::models::{BookConfig, PageBreakPolicy};
use crate::render;
use crate::services::book_service;
use crate::Result;

#[derive(Args)]
pub struct BuildArgs {
    /// Directory containing the PGN files
    pub dir: PathBuf,

    /// Output file for the booklet
    #[arg(short, long, default_value = "chess_puzzles.html")]
    pub output: PathBuf,

    /// Booklet title
    #[arg(long, default_value = "Chess Puzzle Book")]
    pub title: String,

    /// Insert a "Day N" heading every N puzzles
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub days: Option<u32>,

    /// Page break placement
    #[arg(long, value_enum, default_value_t = PageBreakPolicy::PerPuzzle)]
    pub page_breaks: PageBreakPolicy,

    /// Parse the files as-is, without stripping comments and variations
    #[arg(long)]
    pub no_sanitize: bool,

    /// Board diagram square size in pixels
    #[arg(long, default_value_t = render::DEFAULT_SQUARE_SIZE,
          value_parser = clap::value_parser!(u32).range(8..=512))]
    pub square_size: u32,

    /// Print a JSON build summary instead of plain text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct BuildSummary {
    output: String,
    puzzles: usize,
    skipped: Vec<SkipSummary>,
}

#[derive(Serialize)]
struct SkipSummary {
    file: String,
    reason: String,
}

pub fn run(args: BuildArgs) -> Result<()> {
    let config = BookConfig {
        sanitize: !args.no_sanitize,
        group_size: args.days,
        page_breaks: args.page_breaks,
        square_size: args.square_size,
    };

    let build = book_service::build(&args.dir, &config)?;
    document::write_book(&args.output, &args.title, &build, &config)?;

    if args.json {
        let summary = BuildSummary {
            output: args.output.display().to_string(),
            puzzles: build.puzzles.len(),
            skipped: build
                .skipped
                .iter()
                .map(|skip| SkipSummary {
                    file: skip.file.clone(),
                    reason: skip.reason.to_string(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{}",
            format!(
                "Created {} with {} puzzles!",
                args.output.display(),
                build.puzzles.len()
            )
            .green()
        );
        if !build.skipped.is_empty() {
            println!(
                "{}",
                format!("{} file(s) skipped.", build.skipped.len()).yellow()
            );
        }
    }

    Ok(())
}
