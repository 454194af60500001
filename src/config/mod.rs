//! Styling-framework configuration: data model, file discovery and the
//! per-run resolution cache.

mod cache;
mod core;
mod loader;

pub use self::core::{
    CorePlugins, FormatOptions, MatchUtility, PluginConfig, PluginLayer, TailwindConfig,
    ThemeConfig,
};
pub use cache::ConfigCache;
pub use loader::{
    directory_ancestors, find_config_file, load_config_file, parse_config, ConfigFormat,
    CONFIG_FILE_NAMES,
};
