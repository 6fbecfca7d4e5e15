use chessbook::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

#[derive(Parser)]
#[command(name = "chessbook")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Turn a folder of PGN games into a printable puzzle booklet", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the puzzle booklet from a directory of PGN files
    Build(chessbook::cli::build::BuildArgs),

    /// Rename the PGN files in a directory to zero-padded sequential names
    Rename(chessbook::cli::rename::RenameArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Build(args) => chessbook::cli::build::run(args),
        Commands::Rename(args) => chessbook::cli::rename::run(args),
    }
}
