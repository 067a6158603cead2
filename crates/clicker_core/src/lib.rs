//! Clicker core - click counter, level progression and observer broadcast.
//!
//! # Architecture
//!
//! - **State**: [`GameState`] owns the click count, the level and an ordered
//!   observer registry. Every broadcasting operation hands a full
//!   [`Snapshot`] to each observer in subscription order.
//! - **Observers**: four independent subscribers ([`CounterDisplay`],
//!   [`BonusSystem`], [`LevelDisplay`], [`UpgradeSystem`]), each writing to its
//!   own part of a [`Surface`].
//! - **Signals**: observers never mutate state; they return a [`Signal`] that the
//!   [`Orchestrator`] routes back into [`GameState`].
//!
//! # Example
//!
//! ```
//! use clicker_core::{Element, Orchestrator, Rules, Screen};
//!
//! # fn example() -> Result<(), clicker_core::GameError> {
//! let rules = Rules::default();
//! let screen = Screen::new(&rules, Screen::default_upgrades()).shared();
//! let mut game = Orchestrator::new(screen.clone(), &rules);
//!
//! game.click()?;
//! assert_eq!(screen.borrow().text(Element::ClickCounter), "Кликов: 500");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod locale;
mod observer;
mod observers;
mod orchestrator;
mod rules;
mod screen;
mod signal;
mod state;
mod surface;

pub use error::GameError;
pub use locale::Locale;
pub use observer::Observer;
pub use observers::{BonusSystem, CounterDisplay, LevelDisplay, UpgradeSystem};
pub use orchestrator::Orchestrator;
pub use rules::{BonusPolicy, Rules};
pub use screen::{Screen, Upgrade, UpgradeSpec};
pub use signal::Signal;
pub use state::{CLICK_INCREMENT, DEFAULT_DECREMENT, GameState, Snapshot};
pub use surface::{Element, Marker, SharedSurface, Surface, UpgradeId};
