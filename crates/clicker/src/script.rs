//! Headless mode: replays actions from text and reports the state after each.

use crate::action::Action;
use anyhow::Result;
use clicker_core::{Element, Marker, Orchestrator, Screen, Snapshot, UpgradeId};
use derive_more::{Display, Error};
use serde::Serialize;
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tracing::{debug, info, instrument};

/// One parsed script line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    /// Apply an action.
    Act(Action),
    /// Report without acting.
    Show,
}

/// How reports are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One human-readable line per report.
    #[default]
    Plain,
    /// One JSON object per report.
    Json,
}

/// Malformed script line.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Script error on line {}: {}", script_line, message)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// 1-based line number in the script.
    pub script_line: usize,
}

impl ScriptError {
    /// Creates a new script error.
    pub fn new(message: impl Into<String>, script_line: usize) -> Self {
        Self {
            message: message.into(),
            script_line,
        }
    }
}

/// Parses one line. Blank lines and `#` comments yield `None`.
///
/// Accepted forms: `click`, `upgrade N` (1-based), `state`.
pub fn parse_line(line: &str, script_line: usize) -> Result<Option<ScriptStep>, ScriptError> {
    let line = line.split('#').next().unwrap_or_default().trim();
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };

    let step = match command.to_ascii_lowercase().as_str() {
        "click" => ScriptStep::Act(Action::Click),
        "state" => ScriptStep::Show,
        "upgrade" => {
            let raw = words
                .next()
                .ok_or_else(|| ScriptError::new("upgrade needs a number", script_line))?;
            let number: usize = raw.parse().map_err(|_| {
                ScriptError::new(format!("not an upgrade number: {raw}"), script_line)
            })?;
            if number == 0 {
                return Err(ScriptError::new("upgrades are numbered from 1", script_line));
            }
            ScriptStep::Act(Action::Unlock(UpgradeId::from(number - 1)))
        }
        other => {
            return Err(ScriptError::new(format!("unknown command: {other}"), script_line));
        }
    };

    if let Some(extra) = words.next() {
        return Err(ScriptError::new(format!("unexpected argument: {extra}"), script_line));
    }
    Ok(Some(step))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    line: usize,
    step: String,
    snapshot: Snapshot,
    counter: &'a str,
    bonus: &'a str,
    level: &'a str,
    won: bool,
    unlocked: Vec<&'a str>,
}

impl<'a> Report<'a> {
    fn new(line: usize, step: String, snapshot: Snapshot, screen: &'a Screen) -> Self {
        Self {
            line,
            step,
            snapshot,
            counter: screen.text(Element::ClickCounter),
            bonus: screen.text(Element::BonusMessage),
            level: screen.text(Element::LevelDisplay),
            won: screen.has_marker(Element::ClickButton, Marker::Won),
            unlocked: screen
                .upgrades()
                .iter()
                .filter(|upgrade| *upgrade.unlocked())
                .map(|upgrade| upgrade.name().as_str())
                .collect(),
        }
    }

    fn write_plain(&self, mut out: impl Write) -> std::io::Result<()> {
        write!(
            out,
            "{:>4} {:<10} clicks={} level={} | {} | {}",
            self.line,
            self.step,
            self.snapshot.click_count,
            self.snapshot.level,
            self.counter,
            self.level
        )?;
        if !self.bonus.is_empty() {
            write!(out, " | {}", self.bonus)?;
        }
        if self.won {
            write!(out, " | WON")?;
        }
        writeln!(out)
    }
}

/// Runs every line of `input` against `game`, writing one report per step.
///
/// `screen` must be the surface the game was built on. Stops at the first
/// malformed line.
#[instrument(skip_all, fields(format = ?format))]
pub fn run_script(
    game: &mut Orchestrator,
    screen: &Rc<RefCell<Screen>>,
    input: impl BufRead,
    mut output: impl Write,
    format: OutputFormat,
) -> Result<()> {
    let mut steps = 0usize;
    for (index, line) in input.lines().enumerate() {
        let script_line = index + 1;
        let line = line?;
        let Some(step) = parse_line(&line, script_line)? else {
            continue;
        };

        let label = match step {
            ScriptStep::Act(action) => {
                debug!(script_line, %action, "Applying action");
                action.apply(game)?;
                action.to_string()
            }
            ScriptStep::Show => "state".to_string(),
        };
        steps += 1;

        let view = screen.borrow();
        let report = Report::new(script_line, label, game.state().snapshot(), &view);
        match format {
            OutputFormat::Plain => report.write_plain(&mut output)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut output, &report)?;
                writeln!(output)?;
            }
        }
    }

    output.flush()?;
    info!(steps, "Script finished");
    Ok(())
}
