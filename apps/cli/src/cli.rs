//! Command-line arguments.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "sixpence",
    version,
    about = "Drill question/answer items in the terminal"
)]
pub struct Cli {
    /// Config file (TOML); overrides SIXPENCE_CONFIG and ./sixpence.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Item files put the question to the right of the hint
    #[arg(long, global = true)]
    pub right: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Drill the items of one or more files in a single session
    Drill {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Do not show hints next to questions
        #[arg(long)]
        no_hints: bool,

        /// Do not reveal accepted answers after a wrong answer
        #[arg(long)]
        no_answers: bool,
    },

    /// Parse files and print every item back in canonical form
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print items as JSON instead
        #[arg(long)]
        json: bool,
    },
}
