//! Helpers used to filter which discovered assets are admitted into an index.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::asset_paths::{AssetFilter, strip_namespace};
use crate::error::SelectionError;
use crate::index::WEBJARS_PATH_PREFIX;

/// Trait describing selection filters applied to candidate asset paths during discovery.
pub trait AssetInclusion {
  /// Returns `true` when the full asset path should be indexed.
  fn is_included(&self, full_path: &str) -> bool;
}

impl AssetInclusion for AssetFilter {
  fn is_included(&self, full_path: &str) -> bool {
    self.matches(full_path)
  }
}

impl<F> AssetInclusion for F
where
  F: Fn(&str) -> bool,
{
  fn is_included(&self, full_path: &str) -> bool {
    self(full_path)
  }
}

/// Default selection file name searched for next to the configuration.
pub const DEFAULT_SELECTION_FILE: &str = "webjars.local.json";

/// Configuration file layout for selecting which libraries to index.
#[derive(Debug, Default, Deserialize)]
struct LibrarySelectionFile {
  #[serde(default)]
  include: Vec<String>,
  #[serde(default)]
  exclude: Vec<String>,
}

/// Include/exclude rules over library scopes such as `bootstrap` or `bootstrap/2.2.2`.
///
/// Scopes are matched against the part of a full path that follows the namespace prefix, on
/// segment boundaries. Exclusions always win.
#[derive(Debug, Clone)]
pub struct LibrarySelection {
  namespace: String,
  include: Option<BTreeSet<String>>,
  exclude: BTreeSet<String>,
}

impl Default for LibrarySelection {
  fn default() -> Self {
    Self {
      namespace: WEBJARS_PATH_PREFIX.to_string(),
      include: None,
      exclude: BTreeSet::new(),
    }
  }
}

impl LibrarySelection {
  /// Load configuration from the selection file if present.
  pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, SelectionError> {
    let path = path.as_ref();
    let contents = match fs::read_to_string(path) {
      Ok(contents) => contents,
      Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
        return Ok(Self::default());
      }
      Err(err) => {
        return Err(SelectionError::Io {
          path: path.to_path_buf(),
          source: err,
        });
      }
    };

    let file: LibrarySelectionFile =
      serde_json::from_str(&contents).map_err(|err| SelectionError::Parse {
        path: path.to_path_buf(),
        source: err,
      })?;
    Ok(Self::from(file))
  }

  /// Use a namespace prefix other than the WebJars default.
  pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
    self.namespace = namespace.into();
    self
  }

  /// Determine whether an asset belongs to a selected library.
  pub fn is_included(&self, full_path: &str) -> bool {
    let scoped = strip_namespace(full_path, &self.namespace).trim_start_matches('/');

    if self
      .exclude
      .iter()
      .any(|value| scope_matches(value, scoped))
    {
      return false;
    }

    match &self.include {
      Some(include) => include.iter().any(|value| scope_matches(value, scoped)),
      None => true,
    }
  }

  #[cfg(test)]
  fn is_unfiltered(&self) -> bool {
    self.include.is_none() && self.exclude.is_empty()
  }
}

impl AssetInclusion for LibrarySelection {
  fn is_included(&self, full_path: &str) -> bool {
    LibrarySelection::is_included(self, full_path)
  }
}

impl From<LibrarySelectionFile> for LibrarySelection {
  fn from(file: LibrarySelectionFile) -> Self {
    let include = normalise_list(file.include);
    let exclude = normalise_list(file.exclude);

    Self {
      include: (!include.is_empty()).then_some(include),
      exclude,
      ..Self::default()
    }
  }
}

/// Convert a list of raw scopes into a sorted, de-duplicated set.
fn normalise_list(values: impl IntoIterator<Item = String>) -> BTreeSet<String> {
  values
    .into_iter()
    .map(|value| value.trim().trim_matches('/').to_string())
    .filter(|value| !value.is_empty())
    .collect()
}

fn scope_matches(rule: &str, candidate: &str) -> bool {
  if candidate == rule {
    return true;
  }

  candidate
    .strip_prefix(rule)
    .is_some_and(|suffix| suffix.starts_with('/'))
}
