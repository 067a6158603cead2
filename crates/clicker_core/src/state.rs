//! Game state and its observer registry.

use crate::error::GameError;
use crate::observer::Observer;
use crate::signal::Signal;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, instrument, trace};

/// Clicks added by a single press of the click trigger.
pub const CLICK_INCREMENT: i64 = 500;

/// Clicks removed by [`GameState::decrement_click`].
pub const DEFAULT_DECREMENT: i64 = 1;

/// Full state payload handed to every observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Current click count. May be negative.
    pub click_count: i64,
    /// Current level, starting at 1.
    pub level: u32,
}

/// Click count, level and the ordered list of subscribed observers.
///
/// Broadcasting operations notify observers synchronously, in subscription
/// order. Signals returned by observers are queued and drained by the caller
/// with [`GameState::pop_signal`].
pub struct GameState {
    click_count: i64,
    level: u32,
    increment: i64,
    observers: Vec<Rc<dyn Observer>>,
    pending: VecDeque<Signal>,
}

impl GameState {
    /// Creates a new game at zero clicks and level 1.
    #[instrument]
    pub fn new() -> Self {
        Self::with_increment(CLICK_INCREMENT)
    }

    /// Creates a new game whose [`click`](Self::click) adds `increment`.
    #[instrument]
    pub fn with_increment(increment: i64) -> Self {
        Self {
            click_count: 0,
            level: 1,
            increment,
            observers: Vec::new(),
            pending: VecDeque::new(),
        }
    }

    /// Returns the current click count.
    pub fn click_count(&self) -> i64 {
        self.click_count
    }

    /// Returns the current level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Returns the amount a click adds.
    pub fn increment(&self) -> i64 {
        self.increment
    }

    /// Returns the current `{click_count, level}` pair.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            click_count: self.click_count,
            level: self.level,
        }
    }

    /// Number of subscribed observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Appends an observer to the registry.
    #[instrument(skip_all, fields(observer = observer.name()))]
    pub fn subscribe(&mut self, observer: Rc<dyn Observer>) {
        debug!("Subscribing observer");
        self.observers.push(observer);
    }

    /// Removes every registration of `observer`, compared by identity.
    ///
    /// Returns `true` if anything was removed.
    #[instrument(skip_all, fields(observer = observer.name()))]
    pub fn unsubscribe(&mut self, observer: &Rc<dyn Observer>) -> bool {
        let before = self.observers.len();
        self.observers.retain(|registered| !Rc::ptr_eq(registered, observer));
        let removed = self.observers.len() != before;
        debug!(removed, "Unsubscribed observer");
        removed
    }

    /// Sends the current snapshot to every observer in subscription order.
    ///
    /// The first failing observer aborts the broadcast; observers after it are
    /// not notified. Signals raised before the failure stay queued.
    #[instrument(skip(self), fields(click_count = self.click_count, level = self.level))]
    pub fn notify_observers(&mut self) -> Result<(), GameError> {
        let snapshot = self.snapshot();
        for observer in &self.observers {
            trace!(observer = observer.name(), "Notifying observer");
            if let Some(signal) = observer.update(&snapshot)? {
                debug!(observer = observer.name(), %signal, "Observer raised signal");
                self.pending.push_back(signal);
            }
        }
        Ok(())
    }

    /// Adds the configured increment, then broadcasts.
    #[instrument(skip(self))]
    pub fn click(&mut self) -> Result<(), GameError> {
        self.increment_clicks(self.increment);
        self.notify_observers()
    }

    /// Adds `amount` clicks without broadcasting.
    #[instrument(skip(self))]
    pub fn increment_clicks(&mut self, amount: i64) {
        self.click_count += amount;
    }

    /// Subtracts `amount` clicks, then broadcasts. There is no lower bound.
    #[instrument(skip(self))]
    pub fn decrement_clicks(&mut self, amount: i64) -> Result<(), GameError> {
        self.click_count -= amount;
        self.notify_observers()
    }

    /// Subtracts [`DEFAULT_DECREMENT`] clicks, then broadcasts.
    pub fn decrement_click(&mut self) -> Result<(), GameError> {
        self.decrement_clicks(DEFAULT_DECREMENT)
    }

    /// Moves to the next level without broadcasting.
    #[instrument(skip(self), fields(from = self.level))]
    pub fn advance_level(&mut self) {
        self.level += 1;
    }

    /// Takes the oldest queued signal.
    pub fn pop_signal(&mut self) -> Option<Signal> {
        self.pending.pop_front()
    }

    /// Drops every queued signal.
    pub fn discard_signals(&mut self) {
        if !self.pending.is_empty() {
            debug!(count = self.pending.len(), "Discarding queued signals");
            self.pending.clear();
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("click_count", &self.click_count)
            .field("level", &self.level)
            .field("increment", &self.increment)
            .field(
                "observers",
                &self.observers.iter().map(|o| o.name()).collect::<Vec<_>>(),
            )
            .field("pending", &self.pending)
            .finish()
    }
}
