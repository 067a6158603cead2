//! Command-line interface for clicker.

use clap::{Parser, Subcommand};
use clicker_core::{BonusPolicy, Locale};
use std::path::PathBuf;

/// Clicker - click, collect bonuses, buy upgrades, win
#[derive(Parser, Debug)]
#[command(name = "clicker")]
#[command(about = "Terminal clicker game with level upgrades", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "clicker.toml", global = true)]
    pub config: PathBuf,

    /// Language of the game texts (ru, en)
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    /// How bonuses are granted (flat, level)
    #[arg(long, global = true)]
    pub bonus_policy: Option<BonusPolicy>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// File that receives log output
        #[arg(long, default_value = "clicker.log")]
        log_file: PathBuf,
    },

    /// Replay actions from a file (or stdin) and print the state after each
    Script {
        /// Script file; reads stdin when omitted
        input: Option<PathBuf>,

        /// Print one JSON object per step
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}
