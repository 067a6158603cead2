//! Click counter readout.

use crate::error::GameError;
use crate::locale::Locale;
use crate::observer::Observer;
use crate::signal::Signal;
use crate::state::Snapshot;
use crate::surface::{Element, SharedSurface};

/// Writes the click count into [`Element::ClickCounter`].
pub struct CounterDisplay {
    surface: SharedSurface,
    locale: Locale,
}

impl CounterDisplay {
    /// Binds the display to a surface.
    pub fn new(surface: SharedSurface, locale: Locale) -> Self {
        Self { surface, locale }
    }
}

impl Observer for CounterDisplay {
    fn name(&self) -> &str {
        "CounterDisplay"
    }

    fn update(&self, snapshot: &Snapshot) -> Result<Option<Signal>, GameError> {
        let text = self.locale.click_count(snapshot.click_count);
        self.surface.borrow_mut().set_text(Element::ClickCounter, &text);
        Ok(None)
    }
}
