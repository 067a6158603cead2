//! Application state and logic.

use super::input::Input;
use crate::action::Action;
use crate::config::ClickerConfig;
use clicker_core::{GameError, Orchestrator, Screen, UpgradeId};
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use tracing::{debug, instrument};

/// Main application state.
pub struct App {
    game: Orchestrator,
    screen: Rc<RefCell<Screen>>,
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application from configuration.
    #[instrument(skip_all)]
    pub fn new(config: &ClickerConfig) -> Self {
        let screen = config.screen().shared();
        let game = Orchestrator::new(screen.clone(), config.rules());
        Self {
            game,
            screen,
            selected: 0,
            should_quit: false,
        }
    }

    /// Gets the game.
    pub fn game(&self) -> &Orchestrator {
        &self.game
    }

    /// Borrows the screen for rendering.
    pub fn screen(&self) -> Ref<'_, Screen> {
        self.screen.borrow()
    }

    /// Index of the highlighted upgrade.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key input.
    #[instrument(skip(self))]
    pub fn handle(&mut self, input: Input) -> Result<(), GameError> {
        let upgrade_count = self.screen.borrow().upgrades().len();
        match input {
            Input::Click => Action::Click.apply(&mut self.game),
            Input::Unlock(index) if index < upgrade_count => {
                self.selected = index;
                Action::Unlock(UpgradeId::from(index)).apply(&mut self.game)
            }
            Input::Unlock(index) => {
                debug!(index, "No upgrade at index");
                Ok(())
            }
            Input::UnlockSelected if upgrade_count > 0 => {
                Action::Unlock(UpgradeId::from(self.selected)).apply(&mut self.game)
            }
            Input::UnlockSelected => Ok(()),
            Input::SelectNext => {
                if upgrade_count > 0 {
                    self.selected = (self.selected + 1) % upgrade_count;
                }
                Ok(())
            }
            Input::SelectPrevious => {
                if upgrade_count > 0 {
                    self.selected = (self.selected + upgrade_count - 1) % upgrade_count;
                }
                Ok(())
            }
            Input::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
                Ok(())
            }
        }
    }
}
