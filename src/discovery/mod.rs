//! Enumerates candidate asset paths from class path style search roots.
//!
//! A search root is either a directory that may contain the namespace folder, or a `.jar` /
//! `.zip` archive whose entries may live under the namespace prefix. Discovery produces the
//! plain set of full paths that [`crate::PathIndex`] is built from; it does not keep any file
//! handles open once it returns.

mod archive;
mod directory;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use same_file::is_same_file;
use tracing::{debug, info};

use crate::error::DiscoveryError;
use crate::selection::AssetInclusion;

use archive::collect_archive_assets;
use directory::collect_directory_assets;

/// How many directory levels below the namespace folder may be searched.
pub const DEFAULT_MAX_DIRECTORY_DEPTH: usize = 5;

const ARCHIVE_EXTENSIONS: &[&str] = &["jar", "zip"];

enum RootKind {
  Directory,
  Archive,
  Unsupported,
}

/// Collect every asset path under `namespace` across the given search roots.
///
/// `None` is rejected before anything is scanned; an empty slice simply yields no assets.
/// Roots that do not exist, are not archives, or lack the namespace folder are skipped.
pub fn discover_asset_paths(
  roots: Option<&[PathBuf]>,
  namespace: &str,
  max_depth: usize,
  filter: &dyn AssetInclusion,
) -> Result<BTreeSet<String>, DiscoveryError> {
  let roots = roots.ok_or(DiscoveryError::MissingRoots)?;
  let namespace = namespace.trim_matches('/');
  let start = Instant::now();

  let mut assets = BTreeSet::new();
  let mut scanned: Vec<&Path> = Vec::new();

  for root in roots {
    if scanned
      .iter()
      .any(|seen| is_same_file(seen, root).unwrap_or(false))
    {
      debug!("skipping duplicate search root {}", root.display());
      continue;
    }
    scanned.push(root.as_path());

    match classify_root(root) {
      RootKind::Directory => {
        collect_directory_assets(root, namespace, max_depth, filter, &mut assets)?
      }
      RootKind::Archive => collect_archive_assets(root, namespace, filter, &mut assets)?,
      RootKind::Unsupported => {
        debug!("ignoring unsupported search root {}", root.display());
      }
    }
  }

  info!(
    "asset discovery complete: {} roots, {} assets in {:?}",
    scanned.len(),
    assets.len(),
    start.elapsed()
  );

  Ok(assets)
}

fn classify_root(root: &Path) -> RootKind {
  if root.is_dir() {
    return RootKind::Directory;
  }

  let is_archive = root.is_file()
    && root
      .extension()
      .and_then(|ext| ext.to_str())
      .is_some_and(|ext| {
        ARCHIVE_EXTENSIONS
          .iter()
          .any(|known| ext.eq_ignore_ascii_case(known))
      });

  if is_archive {
    RootKind::Archive
  } else {
    RootKind::Unsupported
  }
}
