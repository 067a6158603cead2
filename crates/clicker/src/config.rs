//! Game configuration loaded from TOML.

use clicker_core::{BonusPolicy, Locale, Rules, Screen, UpgradeSpec};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Largest accepted `click_increment`.
pub const MAX_CLICK_INCREMENT: i64 = 1_000_000_000;

/// Largest accepted upgrade cost.
pub const MAX_REQUIRED_CLICKS: i64 = 1_000_000_000_000_000;

/// Rules and the upgrade ladder for one session.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ClickerConfig {
    /// Increment, bonus interval, win level, bonus policy and locale.
    #[serde(flatten)]
    rules: Rules,

    /// Upgrades in display order.
    upgrades: Vec<UpgradeSpec>,
}

impl ClickerConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(upgrades = config.upgrades.len(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parses and validates TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Renders the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// Rejects rules the game cannot run with.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if *self.rules.bonus_interval() <= 0 {
            return Err(ConfigError::new(format!(
                "bonus_interval must be positive, got {}",
                self.rules.bonus_interval()
            )));
        }
        if *self.rules.win_level() < 1 {
            return Err(ConfigError::new("win_level must be at least 1".to_string()));
        }
        // Keeps the click count far away from i64 overflow.
        let increment = *self.rules.click_increment();
        if !(0..=MAX_CLICK_INCREMENT).contains(&increment) {
            return Err(ConfigError::new(format!(
                "click_increment must be within 0..={}, got {}",
                MAX_CLICK_INCREMENT, increment
            )));
        }
        for upgrade in &self.upgrades {
            let required = *upgrade.required_clicks();
            if !(0..=MAX_REQUIRED_CLICKS).contains(&required) {
                return Err(ConfigError::new(format!(
                    "required_clicks of '{}' must be within 0..={}, got {}",
                    upgrade.name(),
                    MAX_REQUIRED_CLICKS,
                    required
                )));
            }
        }
        Ok(())
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(self, locale: Option<Locale>, bonus_policy: Option<BonusPolicy>) -> Self {
        let mut rules = self.rules;
        if let Some(locale) = locale {
            rules = rules.with_locale(locale);
        }
        if let Some(bonus_policy) = bonus_policy {
            rules = rules.with_bonus_policy(bonus_policy);
        }
        Self { rules, ..self }
    }

    /// Builds a fresh screen showing this configuration's upgrades.
    pub fn screen(&self) -> Screen {
        Screen::new(&self.rules, self.upgrades.clone())
    }
}

impl Default for ClickerConfig {
    fn default() -> Self {
        Self {
            rules: Rules::default(),
            upgrades: Screen::default_upgrades(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
