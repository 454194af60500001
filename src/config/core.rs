use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Root of a styling-framework configuration file.
///
/// TOML files use snake_case keys; JSON files may use the framework's
/// camelCase spelling (`corePlugins`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TailwindConfig {
    /// Prefix every utility must carry, e.g. `tw-`
    #[serde(default)]
    pub prefix: String,

    /// Variant separator, `:` when unset
    #[serde(default)]
    pub separator: Option<String>,

    /// Core utility families switched on or off by name
    #[serde(default, alias = "corePlugins")]
    pub core_plugins: CorePlugins,

    #[serde(default)]
    pub theme: ThemeConfig,

    /// Declarative plugins contributing utilities and variants
    #[serde(default)]
    pub plugins: Vec<PluginConfig>,
}

impl TailwindConfig {
    pub fn separator(&self) -> &str {
        match self.separator.as_deref() {
            Some(separator) if !separator.is_empty() => separator,
            _ => ":",
        }
    }
}

/// Theme section: scale overrides plus the `extend` table.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ThemeConfig {
    #[serde(default)]
    pub extend: BTreeMap<String, Value>,

    /// Every other key replaces the scale of the same name
    #[serde(flatten)]
    pub scales: BTreeMap<String, Value>,
}

/// `corePlugins` either as a map of toggles or as an allow-list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CorePlugins {
    Toggles(BTreeMap<String, bool>),
    Allow(Vec<String>),
}

impl Default for CorePlugins {
    fn default() -> Self {
        Self::Toggles(BTreeMap::new())
    }
}

impl CorePlugins {
    pub fn is_enabled(&self, family: &str) -> bool {
        match self {
            Self::Toggles(toggles) => toggles.get(family).copied().unwrap_or(true),
            Self::Allow(allowed) => allowed.iter().any(|name| name == family),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PluginLayer {
    Components,
    #[default]
    Utilities,
}

/// A plugin described as data: fixed class names, value-matched utilities
/// and extra variants.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PluginConfig {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub layer: PluginLayer,

    #[serde(default)]
    pub classes: Vec<String>,

    #[serde(default)]
    pub utilities: Vec<MatchUtility>,

    #[serde(default)]
    pub variants: Vec<String>,
}

/// `root-value` utilities; arbitrary `[...]` values are always accepted.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MatchUtility {
    pub root: String,

    #[serde(default)]
    pub values: Vec<String>,
}

/// Per-run formatting options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatOptions {
    /// Explicit configuration file, bypassing discovery
    pub tailwind_config: Option<PathBuf>,
}
