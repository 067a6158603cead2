//! Composition root: builds the state and its observers, routes input and
//! signals back into state mutation.

use crate::error::GameError;
use crate::observer::Observer;
use crate::observers::{BonusSystem, CounterDisplay, LevelDisplay, UpgradeSystem};
use crate::rules::{BonusPolicy, Rules};
use crate::signal::Signal;
use crate::state::GameState;
use crate::surface::{SharedSurface, UpgradeId};
use std::rc::Rc;
use tracing::{debug, info, instrument};

/// Owns the game state and drives it from player input.
///
/// Every entry point runs to completion: the broadcast, the signals it raised
/// and any broadcasts those signals cause are all processed before returning.
pub struct Orchestrator {
    state: GameState,
    surface: SharedSurface,
    upgrades: Rc<UpgradeSystem>,
    bonus_policy: BonusPolicy,
}

impl Orchestrator {
    /// Builds the state and subscribes the counter, bonus, level and upgrade
    /// observers, in that order.
    #[instrument(skip(surface))]
    pub fn new(surface: SharedSurface, rules: &Rules) -> Self {
        let locale = *rules.locale();
        let mut state = GameState::with_increment(*rules.click_increment());

        let upgrades = Rc::new(UpgradeSystem::new(surface.clone()));
        let observers: [Rc<dyn Observer>; 4] = [
            Rc::new(CounterDisplay::new(surface.clone(), locale)),
            Rc::new(BonusSystem::new(
                surface.clone(),
                locale,
                *rules.bonus_interval(),
            )),
            Rc::new(LevelDisplay::new(surface.clone(), locale, *rules.win_level())),
            upgrades.clone(),
        ];
        for observer in observers {
            state.subscribe(observer);
        }

        info!(observers = state.observer_count(), "Game ready");
        Self {
            state,
            surface,
            upgrades,
            bonus_policy: *rules.bonus_policy(),
        }
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the game state for registering extra observers.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Handles a press of the click trigger.
    #[instrument(skip(self))]
    pub fn click(&mut self) -> Result<(), GameError> {
        let outcome = self.state.click();
        self.settle(outcome)
    }

    /// Handles a click on an upgrade element.
    #[instrument(skip(self))]
    pub fn click_upgrade(&mut self, upgrade: UpgradeId) -> Result<(), GameError> {
        match self.upgrades.handle_upgrade_click(upgrade) {
            Some(signal) => {
                let outcome = self.dispatch(signal);
                self.settle(outcome)
            }
            None => Ok(()),
        }
    }

    /// Drains queued signals until none remain.
    ///
    /// The first error wins; queued signals are dropped once a handler fails.
    fn settle(&mut self, outcome: Result<(), GameError>) -> Result<(), GameError> {
        while let Some(signal) = self.state.pop_signal() {
            if let Err(error) = self.dispatch(signal) {
                self.state.discard_signals();
                return outcome.and(Err(error));
            }
        }
        outcome
    }

    #[instrument(skip(self), fields(signal = signal.name()))]
    fn dispatch(&mut self, signal: Signal) -> Result<(), GameError> {
        match signal {
            Signal::AddBonusClicks { bonus_clicks } => {
                self.on_bonus(bonus_clicks);
                Ok(())
            }
            Signal::UnlockUpgrade {
                upgrade,
                required_clicks,
            } => self.on_unlock(upgrade, required_clicks),
        }
    }

    fn on_bonus(&mut self, bonus_clicks: u32) {
        let amount = match self.bonus_policy {
            BonusPolicy::Flat => self.state.increment(),
            BonusPolicy::Level => i64::from(bonus_clicks),
        };
        debug!(bonus_clicks, amount, policy = %self.bonus_policy, "Granting bonus");
        self.state.increment_clicks(amount);
    }

    fn on_unlock(&mut self, upgrade: UpgradeId, required_clicks: i64) -> Result<(), GameError> {
        if self.state.click_count() < required_clicks {
            debug!(
                %upgrade,
                required_clicks,
                click_count = self.state.click_count(),
                "Not enough clicks, unlock ignored"
            );
            return Ok(());
        }

        self.surface.borrow_mut().unlock_upgrade(upgrade);
        self.state.advance_level();
        info!(%upgrade, level = self.state.level(), "Upgrade unlocked");
        self.state.decrement_clicks(required_clicks)
    }
}
