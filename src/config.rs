//! Picker configuration: which presets to offer and how to display them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    format::{Locale, is_valid_date_format},
    preset::{DEFAULT_PRESETS, Preset},
};

/// Error type for loading and validating a [`PickerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Invalid date format: '{0}'")]
    InvalidDateFormat(String),

    #[error("Too many month names: expected at most 12, found {0}")]
    TooManyMonthNames(usize),
}

/// Settings for a [`SoftRangePicker`](crate::SoftRangePicker).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Presets offered for quick selection, in display order.
    /// `CUSTOM` is always offered last and need not be listed.
    pub presets: Vec<Preset>,

    /// Display settings
    pub locale: Locale,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            presets: DEFAULT_PRESETS.to_vec(),
            locale:  Locale::default(),
        }
    }
}

impl PickerConfig {
    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    /// Returns `ConfigError` if the text is not valid TOML for this shape or
    /// fails [`validate`](Self::validate).
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), presets = config.presets.len(), "loaded picker config");
        Ok(config)
    }

    /// Serializes the configuration as TOML.
    ///
    /// # Errors
    /// Returns `ConfigError::TomlSerialize` if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks values serde cannot.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidDateFormat` for a pattern chrono cannot
    /// parse and `ConfigError::TooManyMonthNames` for more than twelve names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_date_format(&self.locale.date_format) {
            return Err(ConfigError::InvalidDateFormat(self.locale.date_format.clone()));
        }

        let month_count = self.locale.month_names.len();
        if month_count > 12 {
            return Err(ConfigError::TooManyMonthNames(month_count));
        }

        Ok(())
    }

    /// Configured presets without `Custom` and without duplicates, first
    /// occurrence kept.
    pub fn quick_presets(&self) -> Vec<Preset> {
        let mut presets: Vec<Preset> = Vec::with_capacity(self.presets.len());
        for preset in self.presets.iter().copied().filter(|preset| !preset.is_custom()) {
            if !presets.contains(&preset) {
                presets.push(preset);
            }
        }
        presets
    }
}
