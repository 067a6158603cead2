//! Player actions shared by the terminal UI and script mode.

use clicker_core::{GameError, Orchestrator, UpgradeId};
use tracing::instrument;

/// Something the player did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Action {
    /// Pressed the click trigger.
    #[display("click")]
    Click,
    /// Clicked an upgrade element.
    #[display("upgrade {}", _0.index() + 1)]
    Unlock(UpgradeId),
}

impl Action {
    /// Feeds the action into the game.
    #[instrument(skip(game))]
    pub fn apply(self, game: &mut Orchestrator) -> Result<(), GameError> {
        match self {
            Self::Click => game.click(),
            Self::Unlock(upgrade) => game.click_upgrade(upgrade),
        }
    }
}
