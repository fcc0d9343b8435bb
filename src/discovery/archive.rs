use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

use tracing::debug;
use zip::ZipArchive;

use crate::error::DiscoveryError;
use crate::selection::AssetInclusion;

/// List the non-directory entries of an archive that live under `namespace`.
pub(super) fn collect_archive_assets(
  archive_path: &Path,
  namespace: &str,
  filter: &dyn AssetInclusion,
  assets: &mut BTreeSet<String>,
) -> Result<(), DiscoveryError> {
  let archive_error = |source| DiscoveryError::Archive {
    path: archive_path.to_path_buf(),
    source,
  };

  let file = File::open(archive_path).map_err(|source| DiscoveryError::Io {
    path: archive_path.to_path_buf(),
    source,
  })?;
  let mut archive = ZipArchive::new(file).map_err(archive_error)?;

  let prefix = format!("{namespace}/");
  let before = assets.len();

  for i in 0..archive.len() {
    let entry = archive.by_index(i).map_err(archive_error)?;
    if entry.is_dir() {
      continue;
    }

    let name = entry.name();
    if name.starts_with(&prefix) && filter.is_included(name) {
      assets.insert(name.to_string());
    }
  }

  debug!(
    "found {} assets in {}",
    assets.len() - before,
    archive_path.display()
  );

  Ok(())
}
