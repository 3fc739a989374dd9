//! Theme switcher configuration (brandswitch.toml)
//!
//! Every field has a default, so an empty document yields the stock demo:
//! `Brand-A` in light mode, light/dark cycling, `base` as the always-on class.

use crate::error::{ConfigError, ConfigResult};
use crate::selection::Selection;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Top-level configuration
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    /// Class that must always be present on the root element
    pub base_class: String,
    /// Brand used when nothing usable is stored
    pub default_brand: String,
    /// Mode used when nothing usable is stored
    pub default_mode: String,
    /// Known modes, in display order. Drives `cycle_mode`.
    pub modes: Vec<String>,
    pub storage: StorageConfig,
    pub dom: DomConfig,
    /// Diagnostic element id -> CSS variable table
    pub component_tokens: Vec<ComponentToken>,
    /// `EnvFilter` directive used by hosts that install a subscriber
    pub log_filter: String,
}

/// Keys used for the persisted selection
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    pub brand_key: String,
    pub mode_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            brand_key: "brand".to_string(),
            mode_key: "mode".to_string(),
        }
    }
}

/// Element ids and attribute names the page skeleton provides
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct DomConfig {
    pub brand_select_id: String,
    pub mode_select_id: String,
    /// Attribute naming the CSS variable a swatch label displays
    pub variable_attribute: String,
    /// Element showing the raw root class string
    pub class_label_id: String,
}

impl Default for DomConfig {
    fn default() -> Self {
        Self {
            brand_select_id: "brand-select".to_string(),
            mode_select_id: "mode-select".to_string(),
            variable_attribute: "data-var".to_string(),
            class_label_id: "current-class".to_string(),
        }
    }
}

/// One row of the component-token diagnostic table
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub struct ComponentToken {
    pub element_id: String,
    pub variable: String,
}

impl ComponentToken {
    pub fn new(element_id: impl Into<String>, variable: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            variable: variable.into(),
        }
    }
}

/// Stock component-token table for the demo page
pub fn default_component_tokens() -> Vec<ComponentToken> {
    vec![
        ComponentToken::new("btn-radius-value", "--button-border-radius"),
        ComponentToken::new("btn-font-value", "--button-font-family"),
        ComponentToken::new("heading-font-value", "--heading-font-family"),
        ComponentToken::new("tag-radius-value", "--tag-border-radius"),
        ComponentToken::new("tag-font-value", "--tag-font-family"),
        ComponentToken::new("tag-weight-value", "--tag-font-weight"),
    ]
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            base_class: "base".to_string(),
            default_brand: "Brand-A".to_string(),
            default_mode: "Lightmode".to_string(),
            modes: vec!["Lightmode".to_string(), "Darkmode".to_string()],
            storage: StorageConfig::default(),
            dom: DomConfig::default(),
            component_tokens: default_component_tokens(),
            log_filter: "brandswitch=info".to_string(),
        }
    }
}

impl ThemeConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: ThemeConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The selection used when no preference is stored
    pub fn default_selection(&self) -> Selection {
        Selection::new(self.default_brand.clone(), self.default_mode.clone())
    }

    /// Reject configurations the controller cannot honor
    pub fn validate(&self) -> ConfigResult<()> {
        if self.base_class.trim().is_empty() {
            return Err(ConfigError::Invalid("base_class must not be empty".into()));
        }
        if self.base_class.contains(char::is_whitespace) {
            return Err(ConfigError::Invalid(format!(
                "base_class {:?} must be a single class token",
                self.base_class
            )));
        }
        if self.default_brand.is_empty() || self.default_mode.is_empty() {
            return Err(ConfigError::Invalid(
                "default_brand and default_mode must not be empty".into(),
            ));
        }
        if self.storage.brand_key == self.storage.mode_key {
            return Err(ConfigError::Invalid(format!(
                "storage keys must differ (both are {:?})",
                self.storage.brand_key
            )));
        }

        let mut seen = HashSet::new();
        for token in &self.component_tokens {
            if !seen.insert(token.element_id.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate component token element id {:?}",
                    token.element_id
                )));
            }
        }
        Ok(())
    }
}
