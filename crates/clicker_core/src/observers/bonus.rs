//! Bonus announcements.

use crate::error::GameError;
use crate::locale::Locale;
use crate::observer::Observer;
use crate::signal::Signal;
use crate::state::Snapshot;
use crate::surface::{Element, SharedSurface};
use tracing::{debug, instrument};

/// Announces a bonus whenever the click count lands on a non-zero multiple of
/// the interval, and asks the orchestrator to grant it.
///
/// The check is level-triggered: every broadcast that satisfies it raises a new
/// [`Signal::AddBonusClicks`], whether or not the previous one did.
pub struct BonusSystem {
    surface: SharedSurface,
    locale: Locale,
    interval: i64,
}

impl BonusSystem {
    /// Binds the bonus message to a surface.
    pub fn new(surface: SharedSurface, locale: Locale, interval: i64) -> Self {
        Self {
            surface,
            locale,
            interval,
        }
    }

    /// Checks whether a click count earns a bonus.
    pub fn qualifies(&self, click_count: i64) -> bool {
        click_count != 0 && click_count.checked_rem(self.interval) == Some(0)
    }
}

impl Observer for BonusSystem {
    fn name(&self) -> &str {
        "BonusSystem"
    }

    #[instrument(skip(self), fields(interval = self.interval))]
    fn update(&self, snapshot: &Snapshot) -> Result<Option<Signal>, GameError> {
        let mut surface = self.surface.borrow_mut();
        if !self.qualifies(snapshot.click_count) {
            surface.set_text(Element::BonusMessage, "");
            return Ok(None);
        }

        let text = self.locale.bonus(self.interval, snapshot.level);
        surface.set_text(Element::BonusMessage, &text);
        debug!(bonus_clicks = snapshot.level, "Bonus earned");
        Ok(Some(Signal::AddBonusClicks {
            bonus_clicks: snapshot.level,
        }))
    }
}
