//! Page bindings: storage keys, element ids, class names, and defaults.
//!
//! Pages that follow the stock markup use [`PageConfig::default`]. Pages with
//! different ids or keys pass a partial JSON document; missing fields keep
//! their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::{
    BUDGET_TEXT_ID, CURRENCY_CONTROL_ID, CURRENCY_KEY, DARK_CLASS, DEFAULT_CURRENCY, MONETARY_CLASSES,
    MONTHLY_BUDGET_KEY, THEME_CONTROL_ID, THEME_KEY,
};
use crate::error::PrefsError;
use crate::theme::Theme;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub keys: StorageKeys,
    pub dom: DomBindings,
    pub defaults: Defaults,
}

/// Keys in the origin's key-value storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub theme: String,
    pub currency: String,
    pub monthly_budget: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomBindings {
    pub theme_control: String,
    pub currency_control: String,
    pub budget_text: String,
    pub monetary_classes: Vec<String>,
    pub dark_class: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub theme: Theme,
    pub currency: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            theme: THEME_KEY.to_string(),
            currency: CURRENCY_KEY.to_string(),
            monthly_budget: MONTHLY_BUDGET_KEY.to_string(),
        }
    }
}

impl Default for DomBindings {
    fn default() -> Self {
        Self {
            theme_control: THEME_CONTROL_ID.to_string(),
            currency_control: CURRENCY_CONTROL_ID.to_string(),
            budget_text: BUDGET_TEXT_ID.to_string(),
            monetary_classes: MONETARY_CLASSES.iter().map(|c| (*c).to_string()).collect(),
            dark_class: DARK_CLASS.to_string(),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self { theme: Theme::Light, currency: DEFAULT_CURRENCY.to_string() }
    }
}

impl PageConfig {
    /// Parse a (possibly partial) JSON document over the defaults.
    pub fn from_json(raw: &str) -> Result<Self, PrefsError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| PrefsError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject bindings that would make lookups ambiguous or no-ops.
    pub fn validate(&self) -> Result<(), PrefsError> {
        let named = [
            ("keys.theme", &self.keys.theme),
            ("keys.currency", &self.keys.currency),
            ("keys.monthly_budget", &self.keys.monthly_budget),
            ("dom.dark_class", &self.dom.dark_class),
            ("defaults.currency", &self.defaults.currency),
        ];
        for (field, value) in named {
            if value.trim().is_empty() {
                return Err(PrefsError::Config(format!("{field} must not be empty")));
            }
        }
        if self.dom.monetary_classes.iter().any(|c| c.trim().is_empty()) {
            return Err(PrefsError::Config("dom.monetary_classes must not contain empty names".into()));
        }
        if self.keys.theme == self.keys.currency || self.keys.theme == self.keys.monthly_budget
            || self.keys.currency == self.keys.monthly_budget
        {
            return Err(PrefsError::Config("storage keys must be distinct".into()));
        }
        Ok(())
    }
}
