//! Player-facing texts.

use serde::{Deserialize, Serialize};

/// Language of the texts written to the surface.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Locale {
    /// Russian.
    #[default]
    Ru,
    /// English.
    En,
}

impl Locale {
    /// Counter readout.
    pub fn click_count(self, clicks: i64) -> String {
        match self {
            Self::Ru => format!("Кликов: {clicks}"),
            Self::En => format!("Clicks: {clicks}"),
        }
    }

    /// Bonus announcement for hitting a multiple of `interval`.
    pub fn bonus(self, interval: i64, level: u32) -> String {
        match self {
            Self::Ru => format!("🎉 Бонус за {interval} кликов! +{level} кликов!"),
            Self::En => format!("🎉 Bonus for {interval} clicks! +{level} clicks!"),
        }
    }

    /// Level readout.
    pub fn level(self, level: u32) -> String {
        match self {
            Self::Ru => format!("Уровень: {level}"),
            Self::En => format!("Level: {level}"),
        }
    }

    /// Label of the click trigger before the game is won.
    pub fn click_button(self) -> &'static str {
        match self {
            Self::Ru => "Кликни!",
            Self::En => "Click!",
        }
    }

    /// Label of the click trigger once the game is won.
    pub fn victory(self) -> &'static str {
        match self {
            Self::Ru => "Победа!",
            Self::En => "Victory!",
        }
    }
}
