//! The four subscribers wired up by the orchestrator.

mod bonus;
mod counter;
mod level;
mod upgrade;

pub use bonus::BonusSystem;
pub use counter::CounterDisplay;
pub use level::LevelDisplay;
pub use upgrade::UpgradeSystem;
