//! Secondary signals raised by observers and consumed by the orchestrator.

use crate::surface::UpgradeId;
use serde::{Deserialize, Serialize};

/// A request from an observer to mutate game state.
///
/// Observers never touch [`GameState`](crate::GameState) directly. They
/// return a signal and the [`Orchestrator`](crate::Orchestrator) decides what
/// happens next.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Signal {
    /// The bonus threshold was hit; carries the current level.
    #[display("addBonusClicks(+{bonus_clicks})")]
    #[serde(rename_all = "camelCase")]
    AddBonusClicks {
        /// Bonus size announced to the player.
        bonus_clicks: u32,
    },
    /// The player clicked a locked upgrade.
    #[display("unlockUpgrade({upgrade}, {required_clicks})")]
    #[serde(rename_all = "camelCase")]
    UnlockUpgrade {
        /// Upgrade element that was clicked.
        upgrade: UpgradeId,
        /// Clicks spent when the unlock succeeds.
        required_clicks: i64,
    },
}

impl Signal {
    /// Returns the event name of this signal (`addBonusClicks`, `unlockUpgrade`).
    pub fn name(&self) -> &'static str {
        self.into()
    }
}
