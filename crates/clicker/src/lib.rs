//! Clicker - terminal frontend, configuration and script mode.
//!
//! The game itself lives in [`clicker_core`]; this crate loads a
//! [`ClickerConfig`], then either runs the interactive terminal UI
//! ([`run_tui`]) or replays actions headlessly ([`run_script`]).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod logging;
mod script;
mod tui;

pub use action::Action;
pub use config::{ClickerConfig, ConfigError, MAX_CLICK_INCREMENT, MAX_REQUIRED_CLICKS};
pub use logging::{init_file_tracing, init_stderr_tracing};
pub use script::{OutputFormat, ScriptError, ScriptStep, parse_line, run_script};
pub use tui::{App, Input, map_key, run_tui};
