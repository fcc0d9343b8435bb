use std::collections::BTreeSet;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::error::DiscoveryError;
use crate::selection::AssetInclusion;

/// Walk `<root>/<namespace>` collecting every file path accepted by `filter`.
///
/// Paths are recorded relative to `root`, joined with forward slashes, so they start with the
/// namespace prefix on every platform. A directory nested more than `max_depth` levels below
/// the namespace folder aborts the walk.
pub(super) fn collect_directory_assets(
  root: &Path,
  namespace: &str,
  max_depth: usize,
  filter: &dyn AssetInclusion,
  assets: &mut BTreeSet<String>,
) -> Result<(), DiscoveryError> {
  let namespace_dir = root.join(namespace);
  if !namespace_dir.is_dir() {
    debug!("no {namespace} folder in {}", root.display());
    return Ok(());
  }

  for entry in WalkDir::new(&namespace_dir).sort_by_file_name() {
    let entry = entry?;
    let file_type = entry.file_type();

    if file_type.is_dir() {
      if entry.depth() > max_depth {
        return Err(DiscoveryError::DepthExceeded {
          root: namespace_dir,
          max_depth,
        });
      }
      continue;
    }

    if !file_type.is_file() {
      continue;
    }

    let Ok(relative) = entry.path().strip_prefix(&namespace_dir) else {
      continue;
    };
    let asset_path = format!(
      "{namespace}/{}",
      relative.to_string_lossy().replace('\\', "/")
    );

    if filter.is_included(&asset_path) {
      assets.insert(asset_path);
    }
  }

  Ok(())
}
