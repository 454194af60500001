use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::core::TailwindConfig;
use crate::errors::{Error, Result};

/// Conventional configuration file names, in lookup preference.
pub const CONFIG_FILE_NAMES: &[&str] = &["tailwind.config.toml", "tailwind.config.json"];

const MAX_TRAVERSAL_DEPTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Directory ancestors starting at `start`, up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// First configuration file found walking up from `dir`.
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    let found = directory_ancestors(dir.to_path_buf(), MAX_TRAVERSAL_DEPTH).find_map(|dir| {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    });
    match &found {
        Some(path) => debug!("Found config {} for {}", path.display(), dir.display()),
        None => debug!(
            "No config found above {} after checking {} directories",
            dir.display(),
            MAX_TRAVERSAL_DEPTH
        ),
    }
    found
}

/// Parse configuration text in the given format
pub fn parse_config(contents: &str, format: ConfigFormat, path: &Path) -> Result<TailwindConfig> {
    match format {
        ConfigFormat::Toml => {
            toml::from_str(contents).map_err(|e| Error::config_parse(path, e.to_string()))
        }
        ConfigFormat::Json => {
            serde_json::from_str(contents).map_err(|e| Error::config_parse(path, e.to_string()))
        }
    }
}

/// Read and parse the configuration file at `path`.
pub fn load_config_file(path: &Path) -> Result<TailwindConfig> {
    let format =
        ConfigFormat::from_path(path).ok_or_else(|| Error::UnsupportedConfigFormat(path.into()))?;
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::ConfigNotFound(path.into())
        } else {
            Error::io(path, e)
        }
    })?;
    let config = parse_config(&contents, format, path)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}
