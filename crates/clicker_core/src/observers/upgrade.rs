//! Upgrade purchase requests.

use crate::error::GameError;
use crate::observer::Observer;
use crate::signal::Signal;
use crate::state::Snapshot;
use crate::surface::{SharedSurface, UpgradeId};
use tracing::{debug, instrument};

/// Turns clicks on locked upgrade elements into [`Signal::UnlockUpgrade`].
///
/// Handlers are attached to the upgrades that are locked when the system is
/// built; clicks on any other element are ignored. Broadcasts are ignored too.
pub struct UpgradeSystem {
    surface: SharedSurface,
    attached: Vec<UpgradeId>,
}

impl UpgradeSystem {
    /// Scans the surface for locked upgrades and attaches to each.
    #[instrument(skip_all)]
    pub fn new(surface: SharedSurface) -> Self {
        let attached = surface.borrow().locked_upgrades();
        debug!(count = attached.len(), "Attached to locked upgrades");
        Self { surface, attached }
    }

    /// Upgrades this system listens to.
    pub fn attached(&self) -> &[UpgradeId] {
        &self.attached
    }

    /// Handles a click on an upgrade element.
    ///
    /// Returns `None` when the upgrade is unknown, not attached or already
    /// unlocked. Whether the request succeeds is up to the orchestrator.
    #[instrument(skip(self))]
    pub fn handle_upgrade_click(&self, upgrade: UpgradeId) -> Option<Signal> {
        if !self.attached.contains(&upgrade) {
            debug!("No handler attached");
            return None;
        }
        let surface = self.surface.borrow();
        let element = surface.upgrade(upgrade)?;
        if *element.unlocked() {
            debug!("Already unlocked");
            return None;
        }
        Some(Signal::UnlockUpgrade {
            upgrade,
            required_clicks: *element.required_clicks(),
        })
    }
}

impl Observer for UpgradeSystem {
    fn name(&self) -> &str {
        "UpgradeSystem"
    }

    fn update(&self, _snapshot: &Snapshot) -> Result<Option<Signal>, GameError> {
        Ok(None)
    }
}
