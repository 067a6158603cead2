//! In-memory surface used by the terminal frontend and by tests.

use crate::rules::Rules;
use crate::surface::{Element, Marker, Surface, UpgradeId};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;
use tracing::{debug, instrument};

/// Declaration of an upgrade: a name and its unlock cost.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct UpgradeSpec {
    /// Display name.
    name: String,
    /// Clicks required (and spent) to unlock.
    required_clicks: i64,
}

impl UpgradeSpec {
    /// Creates an upgrade declaration.
    pub fn new(name: impl Into<String>, required_clicks: i64) -> Self {
        Self {
            name: name.into(),
            required_clicks,
        }
    }
}

/// An upgrade element as shown on the surface.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Upgrade {
    /// Handle of this element.
    id: UpgradeId,
    /// Display name.
    name: String,
    /// Clicks required (and spent) to unlock.
    required_clicks: i64,
    /// Whether the upgrade has been bought.
    unlocked: bool,
}

/// Surface that keeps every element in memory.
#[derive(Debug, Clone, Default)]
pub struct Screen {
    texts: BTreeMap<Element, String>,
    markers: BTreeSet<(Element, Marker)>,
    upgrades: Vec<Upgrade>,
}

impl Screen {
    /// Creates a screen showing the initial texts and the given upgrades, all locked.
    #[instrument(skip(upgrades))]
    pub fn new(rules: &Rules, upgrades: impl IntoIterator<Item = UpgradeSpec>) -> Self {
        let locale = *rules.locale();
        let texts = BTreeMap::from([
            (Element::ClickCounter, locale.click_count(0)),
            (Element::BonusMessage, String::new()),
            (Element::LevelDisplay, locale.level(1)),
            (Element::ClickButton, locale.click_button().to_string()),
        ]);
        let upgrades: Vec<Upgrade> = upgrades
            .into_iter()
            .enumerate()
            .map(|(index, spec)| Upgrade {
                id: UpgradeId::from(index),
                name: spec.name,
                required_clicks: spec.required_clicks,
                unlocked: false,
            })
            .collect();
        debug!(upgrades = upgrades.len(), "Screen created");
        Self {
            texts,
            markers: BTreeSet::new(),
            upgrades,
        }
    }

    /// The upgrade ladder used when none is configured.
    pub fn default_upgrades() -> Vec<UpgradeSpec> {
        vec![
            UpgradeSpec::new("Auto-clicker", 1000),
            UpgradeSpec::new("Golden mouse", 5000),
            UpgradeSpec::new("Click storm", 20000),
        ]
    }

    /// Wraps the screen in a shared handle.
    pub fn shared(self) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(self))
    }

    /// Returns the text of an element (empty if never set).
    pub fn text(&self, element: Element) -> &str {
        self.texts.get(&element).map(String::as_str).unwrap_or_default()
    }

    /// Checks whether an element carries a marker.
    pub fn has_marker(&self, element: Element, marker: Marker) -> bool {
        self.markers.contains(&(element, marker))
    }

    /// Returns all upgrades in declaration order.
    pub fn upgrades(&self) -> &[Upgrade] {
        &self.upgrades
    }
}

impl Surface for Screen {
    fn set_text(&mut self, element: Element, text: &str) {
        self.texts.insert(element, text.to_string());
    }

    fn add_marker(&mut self, element: Element, marker: Marker) {
        self.markers.insert((element, marker));
    }

    fn locked_upgrades(&self) -> Vec<UpgradeId> {
        self.upgrades
            .iter()
            .filter(|upgrade| !upgrade.unlocked)
            .map(|upgrade| upgrade.id)
            .collect()
    }

    fn upgrade(&self, id: UpgradeId) -> Option<&Upgrade> {
        self.upgrades.get(id.index())
    }

    #[instrument(skip(self))]
    fn unlock_upgrade(&mut self, id: UpgradeId) {
        if let Some(upgrade) = self.upgrades.get_mut(id.index()) {
            upgrade.unlocked = true;
        }
    }
}
