//! Per-run cache of resolved design systems.
//!
//! Two levels, both `DashMap`s shared across rayon workers:
//!
//! - directory -> configuration file found above it (or none)
//! - configuration file (or the built-in default) -> immutable `DesignSystem`
//!
//! A configuration that fails to load is cached as its error, so every file
//! below a broken configuration reports it without re-reading the file.
//!
//! Resolution runs outside the map shards. Two workers racing on the same key
//! may both resolve, but `entry().or_insert` keeps the first value and every
//! caller gets that one back.

use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

use super::core::{FormatOptions, TailwindConfig};
use super::loader::{find_config_file, load_config_file};
use crate::errors::Result;
use crate::oracle::DesignSystem;

/// Owned by one formatting run and passed to every file it formats.
#[derive(Debug, Default)]
pub struct ConfigCache {
    options: FormatOptions,
    locations: DashMap<PathBuf, Option<PathBuf>>,
    systems: DashMap<Option<PathBuf>, Result<Arc<DesignSystem>>>,
    resolutions: AtomicUsize,
}

impl ConfigCache {
    pub fn new(options: FormatOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Design system governing `file`.
    ///
    /// An explicit configuration in the options wins over discovery. Without
    /// any configuration file the built-in defaults apply.
    pub fn design_system_for(&self, file: &Path) -> Result<Arc<DesignSystem>> {
        let key = match &self.options.tailwind_config {
            Some(explicit) => Some(explicit.clone()),
            None => self.config_location(&containing_dir(file)),
        };

        if let Some(system) = self.systems.get(&key) {
            return system.value().clone();
        }

        let system = self.resolve(key.as_deref()).map(Arc::new);
        let stored = self.systems.entry(key).or_insert(system);
        stored.value().clone()
    }

    /// Number of configurations built or failed so far (including redundant
    /// builds lost to a race).
    pub fn resolutions(&self) -> usize {
        self.resolutions.load(Ordering::Relaxed)
    }

    fn config_location(&self, dir: &Path) -> Option<PathBuf> {
        if let Some(found) = self.locations.get(dir) {
            return found.value().clone();
        }
        let found = find_config_file(dir);
        self.locations
            .entry(dir.to_path_buf())
            .or_insert(found)
            .value()
            .clone()
    }

    fn resolve(&self, path: Option<&Path>) -> Result<DesignSystem> {
        self.resolutions.fetch_add(1, Ordering::Relaxed);
        let config = match path {
            Some(path) => load_config_file(path)?,
            None => {
                debug!("Using built-in design system");
                TailwindConfig::default()
            }
        };
        Ok(DesignSystem::new(&config))
    }
}

fn containing_dir(file: &Path) -> PathBuf {
    let dir = match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::oracle::ClassOrder;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_files_in_one_project_share_a_design_system() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("a/b")).unwrap();
        fs::write(
            root.path().join("tailwind.config.toml"),
            "[theme.extend.colors]\ntomato = \"tomato\"\n",
        )
        .unwrap();

        let cache = ConfigCache::default();
        let first = cache
            .design_system_for(&root.path().join("index.html"))
            .unwrap();
        let second = cache
            .design_system_for(&root.path().join("a/b/page.vue"))
            .unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.resolutions(), 1);
        assert!(first.rank("bg-tomato").is_some());
    }

    #[test]
    fn test_explicit_config_overrides_discovery() {
        let root = TempDir::new().unwrap();
        let explicit = root.path().join("custom.json");
        fs::write(&explicit, r#"{ "prefix": "tw-" }"#).unwrap();

        let cache = ConfigCache::new(FormatOptions {
            tailwind_config: Some(explicit),
        });
        let system = cache.design_system_for(Path::new("anywhere/index.html")).unwrap();
        assert!(system.rank("tw-flex").is_some());
        assert_eq!(system.rank("flex"), None);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let cache = ConfigCache::new(FormatOptions {
            tailwind_config: Some(PathBuf::from("/nonexistent/tailwind.config.toml")),
        });
        assert!(matches!(
            cache.design_system_for(Path::new("index.html")),
            Err(Error::ConfigNotFound(_))
        ));
    }

    #[test]
    fn test_broken_config_is_resolved_once() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("pages")).unwrap();
        let config = root.path().join("tailwind.config.toml");
        fs::write(&config, "prefix = ").unwrap();

        let cache = ConfigCache::default();
        for file in ["index.html", "about.html", "pages/blog.html"] {
            match cache.design_system_for(&root.path().join(file)) {
                Err(Error::ConfigParse { path, .. }) => assert_eq!(path, config),
                other => panic!("unexpected result: {other:?}"),
            }
        }
        assert_eq!(cache.resolutions(), 1);
    }

    #[test]
    fn test_parallel_first_access_keeps_one_value() {
        use rayon::prelude::*;

        let root = TempDir::new().unwrap();
        fs::write(root.path().join("tailwind.config.json"), "{}").unwrap();
        let cache = ConfigCache::default();
        let file = root.path().join("index.html");

        let systems: Vec<Arc<DesignSystem>> = (0..16)
            .into_par_iter()
            .map(|_| cache.design_system_for(&file).unwrap())
            .collect();

        let first = cache.design_system_for(&file).unwrap();
        assert!(systems.iter().all(|system| Arc::ptr_eq(system, &first)));
    }
}
