//! Markup and storage configuration for the theme controller.
//!
//! Defaults describe the deployed page (Bootstrap `data-bs-theme` plus
//! Bootstrap Icons). Hosts with different markup pass a JSON override; any
//! field left out keeps its default.

use serde::{Deserialize, Serialize};

use crate::consts::{DARK_ICON_CLASS, ICON_ID, LIGHT_ICON_CLASS, ROOT_ATTRIBUTE, STORAGE_KEY, TOGGLE_ID};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Error returned by [`ThemeConfig::from_json`] and [`ThemeConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The override is not valid JSON or names an unknown field.
    #[error("invalid theme config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A required field is the empty string.
    #[error("theme config field `{0}` must not be empty")]
    Empty(&'static str),
    /// A field that must be a single DOM token contains whitespace.
    #[error("theme config field `{field}` must be a single token, got {value:?}")]
    Whitespace { field: &'static str, value: String },
    /// Both themes map to the same icon class.
    #[error("light and dark icon classes must differ, both are {0:?}")]
    DuplicateIcon(String),
}

/// Icon class token shown for each theme. Exactly one is present at a time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconClasses {
    pub light: String,
    pub dark: String,
}

impl Default for IconClasses {
    fn default() -> Self {
        Self { light: LIGHT_ICON_CLASS.to_owned(), dark: DARK_ICON_CLASS.to_owned() }
    }
}

/// Where the preference is stored and which elements the controller drives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// `localStorage` key for the persisted preference.
    pub storage_key: String,
    /// Attribute set on the root element.
    pub root_attribute: String,
    /// Id of the icon element whose classes reflect the theme.
    pub icon_id: String,
    /// Id of the control that flips the theme on click.
    pub toggle_id: String,
    pub icons: IconClasses,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_owned(),
            root_attribute: ROOT_ATTRIBUTE.to_owned(),
            icon_id: ICON_ID.to_owned(),
            toggle_id: TOGGLE_ID.to_owned(),
            icons: IconClasses::default(),
        }
    }
}

impl ThemeConfig {
    /// Parse a JSON override on top of the defaults and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields, or
    /// any error from [`ThemeConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is a usable DOM token and the icons differ.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_token("storage_key", &self.storage_key)?;
        require_token("root_attribute", &self.root_attribute)?;
        require_token("icon_id", &self.icon_id)?;
        require_token("toggle_id", &self.toggle_id)?;
        require_token("icons.light", &self.icons.light)?;
        require_token("icons.dark", &self.icons.dark)?;
        if self.icons.light == self.icons.dark {
            return Err(ConfigError::DuplicateIcon(self.icons.light.clone()));
        }
        Ok(())
    }
}

fn require_token(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Empty(field));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::Whitespace { field, value: value.to_owned() });
    }
    Ok(())
}
