//! Level readout and the win effect.

use crate::error::GameError;
use crate::locale::Locale;
use crate::observer::Observer;
use crate::signal::Signal;
use crate::state::Snapshot;
use crate::surface::{Element, Marker, SharedSurface};
use tracing::info;

/// Writes the level into [`Element::LevelDisplay`] and turns the click trigger
/// into the victory state once the win level is reached.
pub struct LevelDisplay {
    surface: SharedSurface,
    locale: Locale,
    win_level: u32,
}

impl LevelDisplay {
    /// Binds the display to a surface.
    pub fn new(surface: SharedSurface, locale: Locale, win_level: u32) -> Self {
        Self {
            surface,
            locale,
            win_level,
        }
    }
}

impl Observer for LevelDisplay {
    fn name(&self) -> &str {
        "LevelDisplay"
    }

    fn update(&self, snapshot: &Snapshot) -> Result<Option<Signal>, GameError> {
        let mut surface = self.surface.borrow_mut();
        surface.set_text(Element::LevelDisplay, &self.locale.level(snapshot.level));
        if snapshot.level == self.win_level {
            info!(level = snapshot.level, "Win level reached");
            surface.set_text(Element::ClickButton, self.locale.victory());
            surface.add_marker(Element::ClickButton, Marker::Won);
        }
        Ok(None)
    }
}
