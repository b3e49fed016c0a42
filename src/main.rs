//! Threadweb - CLI
//!
//! Link-deduction puzzle: five friends, ten candidate links, five real ones.
//! The engine evaluates submissions; this binary hosts the terminal adapter.

use anyhow::Result;
use clap::{Parser, Subcommand};
use threadweb::{
    commands::{print_answers, print_rules, run_play},
    puzzle,
};

#[derive(Parser)]
#[command(
    name = "threadweb",
    about = "Link-deduction puzzle with fuzzy answer matching",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the built-in puzzle interactively (default)
    Play,

    /// Print the full how-to-play instructions
    Rules,

    /// Print the answer key (spoilers!)
    Reveal,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // A malformed definition is a configuration defect; fail before play.
    let puzzle = puzzle::builtin()?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&puzzle).map_err(|e| anyhow::anyhow!(e)),
        Commands::Rules => {
            print_rules();
            Ok(())
        }
        Commands::Reveal => {
            print_answers(&puzzle);
            Ok(())
        }
    }
}
