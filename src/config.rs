//! Names and styling the controller depends on.
//!
//! Defaults match the fixed values the stylesheet and markup expect. An
//! embedding page may override any of them by passing JSON to
//! [`ThemeConfig::from_json`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_MARKER_CLASS: &str = "dark";
pub const DEFAULT_CONTROL_ID: &str = "theme-toggle-btn";
pub const DEFAULT_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";

/// Floating bottom-right button styling, applied only when the control is created.
pub const DEFAULT_CONTROL_CLASS: &str = "fixed bottom-5 right-5 p-3 rounded-full bg-white dark:bg-gray-800 text-gray-800 dark:text-white shadow-lg hover:shadow-xl transition-all z-50 border border-gray-200 dark:border-gray-700";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Key in the origin-scoped store holding `"light"` or `"dark"`.
    pub storage_key: String,
    /// Class on the root element; present iff the dark theme is applied.
    pub marker_class: String,
    /// Element id of the toggle control.
    pub control_id: String,
    pub control_class: String,
    pub media_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            marker_class: DEFAULT_MARKER_CLASS.to_owned(),
            control_id: DEFAULT_CONTROL_ID.to_owned(),
            control_class: DEFAULT_CONTROL_CLASS.to_owned(),
            media_query: DEFAULT_MEDIA_QUERY.to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Parse a JSON object of overrides. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] if the JSON is malformed or a required
    /// name is empty.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject names the host APIs cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] naming the first empty field.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("storage_key", &self.storage_key),
            ("marker_class", &self.marker_class),
            ("control_id", &self.control_id),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ThemeError::Config(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }
}
