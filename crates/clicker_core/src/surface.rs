//! Presentation port written to by observers.

use crate::screen::Upgrade;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// A text-bearing element on the surface.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Element {
    /// Click count readout.
    ClickCounter,
    /// Bonus announcement, empty when no bonus applies.
    BonusMessage,
    /// Level readout.
    LevelDisplay,
    /// The click trigger itself.
    ClickButton,
}

/// Visual state flag attached to an element.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Marker {
    /// The game has been won.
    Won,
}

/// Handle to an upgrade element on the surface.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("upgrade#{_0}")]
pub struct UpgradeId(usize);

impl UpgradeId {
    /// Returns the zero-based position of the upgrade.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Output capability injected into observers and the orchestrator.
pub trait Surface {
    /// Replaces the text of an element.
    fn set_text(&mut self, element: Element, text: &str);

    /// Attaches a marker to an element. Markers are never removed.
    fn add_marker(&mut self, element: Element, marker: Marker);

    /// Returns the ids of upgrades that are still locked.
    fn locked_upgrades(&self) -> Vec<UpgradeId>;

    /// Looks up an upgrade element.
    fn upgrade(&self, id: UpgradeId) -> Option<&Upgrade>;

    /// Flips an upgrade element to the unlocked state.
    fn unlock_upgrade(&mut self, id: UpgradeId);
}

/// Single-threaded shared handle to a [`Surface`].
pub type SharedSurface = Rc<RefCell<dyn Surface>>;
