//! Locator configuration describing where assets are discovered and how they are filtered.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::asset_paths::AssetFilter;
use crate::discovery::DEFAULT_MAX_DIRECTORY_DEPTH;
use crate::error::ConfigError;
use crate::index::{PathIndex, WEBJARS_PATH_PREFIX};
use crate::selection::{DEFAULT_SELECTION_FILE, LibrarySelection};

/// File name looked up by [`LocatorConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "webjar-locator.config.json";

/// Discoverable configuration for building a [`PathIndex`] from search roots.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LocatorConfig {
    /// Leading path shared by every indexed asset.
    pub namespace_prefix: String,
    /// Directories and `.jar`/`.zip` archives to scan, relative to the configuration directory.
    pub search_roots: Vec<PathBuf>,
    /// Regular expression a full asset path must match to be indexed.
    pub filter: String,
    /// Deepest directory level searched below the namespace folder.
    pub max_directory_depth: usize,
    /// Optional JSON file listing which libraries to include or exclude.
    pub selection_file: String,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            namespace_prefix: WEBJARS_PATH_PREFIX.into(),
            search_roots: Vec::new(),
            filter: ".*".into(),
            max_directory_depth: DEFAULT_MAX_DIRECTORY_DEPTH,
            selection_file: DEFAULT_SELECTION_FILE.into(),
        }
    }
}

impl LocatorConfig {
    /// Load configuration from the provided directory.
    ///
    /// A missing configuration file yields the defaults; an unreadable or malformed one is an
    /// error.
    pub fn discover(config_dir: &Path) -> Result<Self, ConfigError> {
        let candidate = config_dir.join(DEFAULT_CONFIG_FILE);
        match Self::from_path(&candidate) {
            Err(ConfigError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                debug!("no {} found, using defaults", candidate.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Search roots resolved against the configuration directory.
    pub fn search_root_paths(&self, config_dir: &Path) -> Vec<PathBuf> {
        self.search_roots
            .iter()
            .map(|root| config_dir.join(root))
            .collect()
    }

    /// Path to the library selection file.
    pub fn selection_file_path(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(&self.selection_file)
    }

    /// Discover assets in the configured roots and build an index over them.
    pub fn build_index(&self, config_dir: &Path) -> Result<PathIndex, ConfigError> {
        let filter = AssetFilter::new(&self.filter)?;
        let selection = LibrarySelection::load_from_path(self.selection_file_path(config_dir))?
            .with_namespace(self.namespace_prefix.trim_matches('/'));
        let accept = |path: &str| filter.matches(path) && selection.is_included(path);

        let roots = self.search_root_paths(config_dir);
        let index = PathIndex::discover_with_depth(
            Some(roots.as_slice()),
            &self.namespace_prefix,
            self.max_directory_depth,
            &accept,
        )?;

        Ok(index)
    }
}
