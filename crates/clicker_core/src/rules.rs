//! Tunable game rules.

use crate::locale::Locale;
use crate::state::CLICK_INCREMENT;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// How the orchestrator applies an `addBonusClicks` signal.
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
pub enum BonusPolicy {
    /// Adds the click increment and ignores the announced bonus.
    #[default]
    Flat,
    /// Adds the announced bonus (the current level).
    Level,
}

/// Constants shared by the state, the observers and the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Clicks added per press of the click trigger.
    click_increment: i64,
    /// Bonus fires when the click count is a non-zero multiple of this.
    bonus_interval: i64,
    /// Level at which the game is won.
    win_level: u32,
    /// Bonus handling.
    bonus_policy: BonusPolicy,
    /// Language of surface texts.
    locale: Locale,
}

impl Rules {
    /// Returns a copy with a different bonus policy.
    pub fn with_bonus_policy(self, bonus_policy: BonusPolicy) -> Self {
        Self {
            bonus_policy,
            ..self
        }
    }

    /// Returns a copy with a different locale.
    pub fn with_locale(self, locale: Locale) -> Self {
        Self { locale, ..self }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            click_increment: CLICK_INCREMENT,
            bonus_interval: 10,
            win_level: 4,
            bonus_policy: BonusPolicy::Flat,
            locale: Locale::Ru,
        }
    }
}
