//! Page integration settings.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server templates own the markup, so every selector, attribute, icon
//! class and message the script touches is named here. Pages may override
//! any subset with a JSON document in `<script id="ui-config">`; omitted
//! fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Element id of the optional JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "ui-config";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// `localStorage` key holding the raw theme preference.
    pub storage_key: String,
    /// Media query reporting the OS light preference.
    pub light_query: String,
    pub theme_attribute: String,
    pub prefers_light_attribute: String,
    /// Selector for theme toggle buttons.
    pub toggle_selector: String,
    /// Selector for the icon elements inside toggle buttons.
    pub icon_selector: String,
    /// Icon class shown while the effective theme is dark.
    pub sun_icon_class: String,
    /// Icon class shown otherwise.
    pub moon_icon_class: String,
    pub toast_element_id: String,
    pub toast_visible_class: String,
    pub toast_duration_ms: u32,
    pub game_removed_event: String,
    pub toast_event: String,
    pub game_removed_message: String,
    /// Fallback when a `toast` event carries no usable detail.
    pub default_toast_message: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_owned(),
            light_query: "(prefers-color-scheme: light)".to_owned(),
            theme_attribute: "data-theme".to_owned(),
            prefers_light_attribute: "data-prefers-light".to_owned(),
            toggle_selector: ".theme-toggle".to_owned(),
            icon_selector: ".theme-toggle i".to_owned(),
            sun_icon_class: "bi bi-sun".to_owned(),
            moon_icon_class: "bi bi-moon-stars".to_owned(),
            toast_element_id: "app-toast".to_owned(),
            toast_visible_class: "show".to_owned(),
            toast_duration_ms: 2000,
            game_removed_event: "game-removed".to_owned(),
            toast_event: "toast".to_owned(),
            game_removed_message: "Game deleted".to_owned(),
            default_toast_message: "Done".to_owned(),
        }
    }
}

impl UiConfig {
    /// Parse and validate a JSON override document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make the script silently do nothing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.toast_duration_ms == 0 {
            return Err(ConfigError::Invalid("toast_duration_ms must be positive".to_owned()));
        }
        let required = [
            ("storage_key", &self.storage_key),
            ("theme_attribute", &self.theme_attribute),
            ("prefers_light_attribute", &self.prefers_light_attribute),
            ("toggle_selector", &self.toggle_selector),
            ("icon_selector", &self.icon_selector),
            ("toast_element_id", &self.toast_element_id),
            ("toast_visible_class", &self.toast_visible_class),
            ("game_removed_event", &self.game_removed_event),
            ("toast_event", &self.toast_event),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }
}
