//! Clicker - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use clicker::{
    ClickerConfig, OutputFormat, init_file_tracing, init_stderr_tracing, run_script, run_tui,
};
use clicker_core::Orchestrator;
use cli::{Cli, Command};
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let Cli {
        config,
        locale,
        bonus_policy,
        command,
    } = Cli::parse();
    let command = command.unwrap_or(Command::Play {
        log_file: PathBuf::from("clicker.log"),
    });

    // Tracing goes up first so config loading is logged too.
    match &command {
        Command::Play { log_file } => init_file_tracing(log_file)?,
        Command::Script { .. } | Command::Config => init_stderr_tracing(),
    }
    let config = ClickerConfig::load(&config)?.with_overrides(locale, bonus_policy);

    match command {
        Command::Play { .. } => run_tui(&config),
        Command::Script { input, json } => {
            let format = if json {
                OutputFormat::Json
            } else {
                OutputFormat::Plain
            };
            run_script_mode(&config, input, format)
        }
        Command::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

#[instrument(skip(config))]
fn run_script_mode(
    config: &ClickerConfig,
    input: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let screen = config.screen().shared();
    let mut game = Orchestrator::new(screen.clone(), config.rules());
    let stdout = io::stdout().lock();

    match input {
        Some(path) => {
            info!(path = %path.display(), "Running script file");
            let file = std::fs::File::open(&path)?;
            run_script(&mut game, &screen, BufReader::new(file), stdout, format)
        }
        None => {
            info!("Running script from stdin");
            run_script(&mut game, &screen, io::stdin().lock(), stdout, format)
        }
    }
}
