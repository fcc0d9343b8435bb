//! A single asset reference resolved lazily against a [`PathIndex`].

use tracing::debug;

use crate::asset_paths::{normalize, parent_folder, strip_namespace};
use crate::error::{LocatorError, LocatorResult};
use crate::index::PathIndex;

/// A partial asset uri such as `font-awesome.css`, bound to the index it is resolved against.
///
/// Creating a reference does not resolve it; use [`AssetRef::is_valid`] or
/// [`AssetRef::full_path`] to find out whether it identifies exactly one asset.
#[derive(Debug, Clone, Copy)]
pub struct AssetRef<'a> {
  index: &'a PathIndex,
  uri: &'a str,
}

/// An [`AssetRef`] that owns its uri, as produced by [`AssetRef::relative`].
#[derive(Debug, Clone)]
pub struct OwnedAssetRef<'a> {
  index: &'a PathIndex,
  uri: String,
}

impl<'a> AssetRef<'a> {
  /// Wrap a partial uri. An empty uri is rejected.
  pub fn new(index: &'a PathIndex, uri: &'a str) -> LocatorResult<Self> {
    require_non_empty(uri, "uri")?;
    debug!("asset uri: {uri}");
    Ok(Self { index, uri })
  }

  /// The partial uri this reference was created with.
  pub fn uri(&self) -> &'a str {
    self.uri
  }

  /// Returns `true` when the uri identifies exactly one indexed asset.
  ///
  /// Missing and ambiguous uris are both reported as invalid.
  pub fn is_valid(&self) -> bool {
    self.full_path().is_ok()
  }

  /// The full path of the asset this uri identifies.
  pub fn full_path(&self) -> LocatorResult<&'a str> {
    self.index.full_path(self.uri)
  }

  /// Create a reference to a resource addressed relative to this one, e.g.
  /// `../fonts/fontawesome-webfont.eot` from a stylesheet.
  ///
  /// The new uri is derived from this reference's full path, so this reference must resolve.
  /// The derived reference itself is not resolved.
  pub fn relative(&self, relative_path: &str) -> LocatorResult<OwnedAssetRef<'a>> {
    require_non_empty(relative_path, "relative path")?;
    sibling_of(self.index, self.full_path()?, relative_path)
  }
}

impl<'a> OwnedAssetRef<'a> {
  /// Wrap an owned partial uri. An empty uri is rejected.
  pub fn new(index: &'a PathIndex, uri: impl Into<String>) -> LocatorResult<Self> {
    let uri = uri.into();
    require_non_empty(&uri, "uri")?;
    debug!("asset uri: {uri}");
    Ok(Self { index, uri })
  }

  /// Borrow this reference as an [`AssetRef`].
  pub fn borrowed(&self) -> AssetRef<'_> {
    AssetRef {
      index: self.index,
      uri: &self.uri,
    }
  }

  /// The partial uri this reference wraps.
  pub fn uri(&self) -> &str {
    &self.uri
  }

  /// See [`AssetRef::is_valid`].
  pub fn is_valid(&self) -> bool {
    self.borrowed().is_valid()
  }

  /// See [`AssetRef::full_path`].
  pub fn full_path(&self) -> LocatorResult<&'a str> {
    self.index.full_path(&self.uri)
  }

  /// See [`AssetRef::relative`].
  pub fn relative(&self, relative_path: &str) -> LocatorResult<OwnedAssetRef<'a>> {
    require_non_empty(relative_path, "relative path")?;
    sibling_of(self.index, self.full_path()?, relative_path)
  }
}

/// Join `relative_path` onto the folder of `full_path` and turn the result back into a
/// namespace-relative uri.
fn sibling_of<'a>(
  index: &'a PathIndex,
  full_path: &str,
  relative_path: &str,
) -> LocatorResult<OwnedAssetRef<'a>> {
  let combined = format!("{}{relative_path}", parent_folder(full_path));
  let normalized = normalize(&combined).ok_or_else(|| {
    LocatorError::InvalidArgument(format!("{relative_path} escapes the asset root"))
  })?;

  let uri = strip_namespace(&normalized, index.namespace()).to_string();
  debug!("relative uri: {uri}");

  Ok(OwnedAssetRef { index, uri })
}

fn require_non_empty(value: &str, name: &str) -> LocatorResult<()> {
  if value.is_empty() {
    return Err(LocatorError::InvalidArgument(format!("{name} cannot be empty")));
  }
  Ok(())
}
