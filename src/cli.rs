//! Command-line interface for strictly_xo.

use clap::{Parser, Subcommand};
use strictly_grid::PlayerKind;
use strictly_xo::VariantId;

/// Strictly XO - tic-tac-toe variants against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_xo")]
#[command(about = "Console tic-tac-toe variants with a minimax computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the available variants
    List,

    /// Play one game of a variant
    Play {
        /// Variant name, as shown by `list`
        variant: VariantId,

        /// Who plays X (moves first)
        #[arg(long, default_value = "human")]
        x: PlayerKind,

        /// Who plays O
        #[arg(long, default_value = "computer")]
        o: PlayerKind,

        /// Search depth for computer players (overrides the config file)
        #[arg(long)]
        depth: Option<u32>,

        /// Seed for obstacle placement (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,

        /// Word list for the words variant (overrides the config file)
        #[arg(long)]
        dictionary: Option<std::path::PathBuf>,
    },

    /// Pick variants and players from a numbered menu
    Menu,
}
