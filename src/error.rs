//! Error types shared across the locator.

use std::path::PathBuf;

/// Failures raised while resolving a partial asset path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocatorError {
  /// A required argument was empty.
  #[error("invalid argument: {0}")]
  InvalidArgument(String),

  /// No stored asset ends with the queried path.
  #[error(
    "{0} could not be found. Make sure you've added the corresponding WebJar and please check for typos."
  )]
  NotFound(String),

  /// Several stored assets end with the queried path.
  #[error(
    "Multiple matches found for {0}. Please provide a more specific path, for example by including a version number."
  )]
  AmbiguousMatch(String),
}

/// Convenience alias for lookup results.
pub type LocatorResult<T> = Result<T, LocatorError>;

/// Failures raised while enumerating assets from search roots.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
  /// Discovery was requested without any search root list.
  #[error("search roots must be provided")]
  MissingRoots,

  /// A directory tree nests deeper than the configured limit.
  #[error("got deeper than {max_depth} levels while searching {}", .root.display())]
  DepthExceeded {
    /// Namespace folder being scanned.
    root: PathBuf,
    /// Configured depth limit.
    max_depth: usize,
  },

  /// The filter expression could not be compiled.
  #[error("invalid asset filter: {0}")]
  InvalidFilter(#[from] regex::Error),

  /// Reading a search root failed.
  #[error("failed to read {}: {source}", .path.display())]
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },

  /// Walking a directory root failed.
  #[error("failed to walk directory: {0}")]
  Walk(#[from] walkdir::Error),

  /// An archive root could not be listed.
  #[error("failed to list archive {}: {source}", .path.display())]
  Archive {
    /// Archive that caused the error.
    path: PathBuf,
    /// Source archive error.
    source: zip::result::ZipError,
  },
}

/// Failures raised while loading a library selection file.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
  /// Failed to read the selection file from disk.
  #[error("failed to read {}: {source}", .path.display())]
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// Failed to parse the JSON selection file.
  #[error("failed to parse {}: {source}", .path.display())]
  Parse {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
}

/// Failures raised while loading configuration or building an index from it.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// Failed to read the configuration file.
  #[error("failed to read {}: {source}", .path.display())]
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// Failed to parse the configuration file.
  #[error("failed to parse {}: {source}", .path.display())]
  Parse {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
  /// The referenced selection file could not be loaded.
  #[error(transparent)]
  Selection(#[from] SelectionError),
  /// Discovery over the configured roots failed.
  #[error(transparent)]
  Discovery(#[from] DiscoveryError),
}
