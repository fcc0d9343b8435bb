//! Reversed-path index answering "which asset does this path suffix identify?".
//!
//! Every full path is stored under a key made of its segments in reverse order, so that
//! `META-INF/resources/webjars/jquery/1.8.3/jquery.js` is keyed as
//! `jquery.js/1.8.3/jquery/webjars/resources/META-INF`. A suffix lookup on the original path
//! then becomes a prefix lookup on the keys, which the ordered map answers with a single range
//! scan starting at the reversed query.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use tracing::debug;

use crate::asset_paths::{prepend_slash, reverse_path};
use crate::discovery::{DEFAULT_MAX_DIRECTORY_DEPTH, discover_asset_paths};
use crate::error::{DiscoveryError, LocatorError, LocatorResult};
use crate::selection::AssetInclusion;

/// The path to where WebJar resources live inside archives and class path directories.
pub const WEBJARS_PATH_PREFIX: &str = "META-INF/resources/webjars";

/// Immutable lookup structure over a snapshot of full asset paths.
///
/// The index is never mutated after construction, so a shared reference can be used from any
/// number of threads at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathIndex {
  namespace: String,
  entries: BTreeMap<String, String>,
}

impl PathIndex {
  /// Build an index over the given full paths using the WebJars namespace prefix.
  pub fn build<I, S>(paths: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self::with_namespace(WEBJARS_PATH_PREFIX, paths)
  }

  /// Build an index whose full paths live under a custom namespace prefix.
  pub fn with_namespace<I, S>(namespace: impl Into<String>, paths: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let entries = paths
      .into_iter()
      .map(Into::into)
      .map(|path| (reverse_path(&path), path))
      .collect::<BTreeMap<_, _>>();

    debug!("indexed {} asset paths", entries.len());

    Self {
      namespace: namespace.into(),
      entries,
    }
  }

  /// Discover every asset below `namespace` in the given roots and index the accepted ones.
  ///
  /// Directory roots are walked up to the default depth limit; see [`discover_asset_paths`].
  /// Surrounding `/` characters are trimmed from `namespace`.
  pub fn discover(
    roots: Option<&[PathBuf]>,
    namespace: &str,
    filter: &dyn AssetInclusion,
  ) -> Result<Self, DiscoveryError> {
    Self::discover_with_depth(roots, namespace, DEFAULT_MAX_DIRECTORY_DEPTH, filter)
  }

  /// Like [`PathIndex::discover`], with an explicit directory depth limit.
  pub fn discover_with_depth(
    roots: Option<&[PathBuf]>,
    namespace: &str,
    max_depth: usize,
    filter: &dyn AssetInclusion,
  ) -> Result<Self, DiscoveryError> {
    let namespace = namespace.trim_matches('/');
    let paths = discover_asset_paths(roots, namespace, max_depth, filter)?;
    Ok(Self::with_namespace(namespace, paths))
  }

  /// Namespace prefix shared by every stored path.
  pub fn namespace(&self) -> &str {
    &self.namespace
  }

  /// Number of stored paths.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns `true` if nothing has been indexed.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Iterate over `(reversed key, full path)` pairs in key order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self
      .entries
      .iter()
      .map(|(key, path)| (key.as_str(), path.as_str()))
  }

  /// Given a distinct path suffix such as `jquery.js` or `2.2.2/js/bootstrap.js`, return the
  /// full path of the one asset it identifies.
  ///
  /// A single leading `/` on the query is optional. The suffix must align with whole segments:
  /// `oo/bar.js` does not match `foo/bar.js`. An empty query, or a bare `/`, is rejected with
  /// [`LocatorError::InvalidArgument`].
  pub fn full_path(&self, partial_path: &str) -> LocatorResult<&str> {
    let query = prepend_slash(partial_path);
    let Some(suffix) = query.strip_prefix('/').filter(|suffix| !suffix.is_empty()) else {
      return Err(LocatorError::InvalidArgument(
        "partial path cannot be empty".into(),
      ));
    };

    let reversed = reverse_path(suffix);
    let mut matches = self.suffix_matches(&reversed);

    let Some(full_path) = matches.next() else {
      return Err(LocatorError::NotFound(partial_path.to_string()));
    };

    if matches.next().is_some() {
      return Err(LocatorError::AmbiguousMatch(partial_path.to_string()));
    }

    Ok(full_path)
  }

  /// All stored full paths that start with the literal `prefix`.
  pub fn list_under(&self, prefix: &str) -> BTreeSet<String> {
    self
      .entries
      .values()
      .filter(|path| path.starts_with(prefix))
      .cloned()
      .collect()
  }

  /// List assets within a folder given relative to the namespace, e.g. `/multiple/1.0.0`.
  ///
  /// The leading `/` may be omitted.
  pub fn list_assets(&self, folder_path: &str) -> BTreeSet<String> {
    self.list_under(&format!("{}{}", self.namespace, prepend_slash(folder_path)))
  }

  /// Full paths whose reversed key is `reversed` itself or continues it with a `/`.
  ///
  /// Keys extending `reversed` with a character sorting below `/` (such as `.` or `-`) can sit
  /// between the exact key and the `reversed/` range, so the two are looked up separately.
  fn suffix_matches<'a>(&'a self, reversed: &str) -> impl Iterator<Item = &'a str> + use<'a> {
    let bounded = format!("{reversed}/");
    let exact = self.entries.get(reversed).map(String::as_str);
    let nested = self
      .entries
      .range(bounded.clone()..)
      .take_while(move |(key, _)| key.starts_with(&bounded))
      .map(|(_, path)| path.as_str());

    exact.into_iter().chain(nested)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_support::{NS, sample_index};

  #[test]
  fn gets_paths_of_assets_in_nested_folders() {
    let index = sample_index();
    assert_eq!(
      index.full_path("bootstrap.js").unwrap(),
      format!("{NS}/bootstrap/2.2.2/js/bootstrap.js")
    );
    assert_eq!(
      index.full_path("bootstrap.css").unwrap(),
      format!("{NS}/bootstrap/2.2.2/css/bootstrap.css")
    );
  }

  #[test]
  fn gets_full_path_of_asset_in_root_folder() {
    assert_eq!(
      sample_index().full_path("jquery.js").unwrap(),
      format!("{NS}/jquery/1.8.3/jquery.js")
    );
  }

  #[test]
  fn accepts_partial_paths_with_folders() {
    let index = sample_index();
    let expected = format!("{NS}/bootstrap/2.2.2/js/bootstrap.js");
    for query in [
      "js/bootstrap.js",
      "/2.2.2/js/bootstrap.js",
      "bootstrap/2.2.2/js/bootstrap.js",
      "/bootstrap/2.2.2/js/bootstrap.js",
    ] {
      assert_eq!(index.full_path(query).unwrap(), expected, "query {query}");
    }
  }

  #[test]
  fn resolves_a_complete_full_path() {
    let index = sample_index();
    let full = format!("{NS}/jquery/1.8.3/jquery.js");
    assert_eq!(index.full_path(&full).unwrap(), full);
  }

  #[test]
  fn reports_unknown_assets() {
    let index = sample_index();
    for query in ["asset-unknown.js", "unknown.js"] {
      assert_eq!(
        index.full_path(query),
        Err(LocatorError::NotFound(query.to_string()))
      );
    }
  }

  #[test]
  fn distinguishes_between_multiple_versions() {
    let index = sample_index();
    assert_eq!(
      index.full_path("1.0.0/multiple.js").unwrap(),
      format!("{NS}/multiple/1.0.0/multiple.js")
    );
    assert_eq!(
      index.full_path("2.0.0/multiple.js").unwrap(),
      format!("{NS}/multiple/2.0.0/multiple.js")
    );
    assert_eq!(
      index.full_path("2.0.0/module/multiple_module.js").unwrap(),
      format!("{NS}/multiple/2.0.0/module/multiple_module.js")
    );
  }

  #[test]
  fn reports_several_matches() {
    let index = sample_index();
    for query in ["multiple.js", "module/multiple_module.js"] {
      assert_eq!(
        index.full_path(query),
        Err(LocatorError::AmbiguousMatch(query.to_string()))
      );
    }
  }

  #[test]
  fn matches_only_whole_segments() {
    let index = PathIndex::with_namespace("ns", [
      "ns/foo/1.0/foo/bar.js",
      "ns/lib/1.0/not-bootstrap.js",
      "ns/lib/1.0/bootstrap.js.map",
    ]);

    assert_eq!(
      index.full_path("oo/bar.js"),
      Err(LocatorError::NotFound("oo/bar.js".into()))
    );
    assert_eq!(
      index.full_path("bootstrap.js"),
      Err(LocatorError::NotFound("bootstrap.js".into()))
    );
    assert_eq!(index.full_path("foo/bar.js").unwrap(), "ns/foo/1.0/foo/bar.js");
  }

  #[test]
  fn finds_match_behind_keys_sorting_below_separator() {
    let index = PathIndex::with_namespace("ns", [
      "ns/lib/1.0/app.js",
      "ns/lib/1.0/app.js.map",
      "ns/lib/1.0/app.js-backup",
    ]);

    assert_eq!(index.full_path("app.js").unwrap(), "ns/lib/1.0/app.js");
    assert_eq!(index.full_path("app.js.map").unwrap(), "ns/lib/1.0/app.js.map");
  }

  #[test]
  fn detects_ambiguity_once_second_version_is_added() {
    let paths = [
      "ns/bootstrap/2.2.2/js/bootstrap.js",
      "ns/bootstrap/2.2.2/css/bootstrap.css",
      "ns/jquery/1.8.3/jquery.js",
    ];
    let index = PathIndex::with_namespace("ns", paths);
    assert_eq!(
      index.full_path("css/bootstrap.css").unwrap(),
      "ns/bootstrap/2.2.2/css/bootstrap.css"
    );
    assert_eq!(
      index.full_path("bootstrap.js").unwrap(),
      "ns/bootstrap/2.2.2/js/bootstrap.js"
    );

    let widened = PathIndex::with_namespace(
      "ns",
      paths.into_iter().chain(["ns/bootstrap/1.0.0/css/bootstrap.css"]),
    );
    assert_eq!(
      widened.full_path("bootstrap.css"),
      Err(LocatorError::AmbiguousMatch("bootstrap.css".into()))
    );
  }

  #[test]
  fn collapses_duplicate_inputs() {
    let index = PathIndex::with_namespace("ns", ["ns/a/1/a.js", "ns/a/1/a.js"]);
    assert_eq!(index.len(), 1);
    assert_eq!(index.full_path("a.js").unwrap(), "ns/a/1/a.js");
  }

  #[test]
  fn lookups_are_repeatable() {
    let index = sample_index();
    let first = index.full_path("jquery.js");
    for _ in 0..3 {
      assert_eq!(index.full_path("jquery.js"), first);
    }
  }

  #[test]
  fn keys_reverse_back_to_their_paths() {
    let index = sample_index();
    assert!(!index.is_empty());
    for (key, path) in index.iter() {
      assert_eq!(reverse_path(key), path);
    }
  }

  #[test]
  fn lists_assets_in_folder() {
    let prefix = format!("{NS}/multiple/1.0.0/");
    let assets = sample_index().list_assets("/multiple/1.0.0");

    let expected: BTreeSet<String> = [
      format!("{prefix}multiple.js"),
      format!("{prefix}module/multiple_module.js"),
    ]
    .into_iter()
    .collect();
    assert_eq!(assets, expected);
  }

  #[test]
  fn lists_assets_without_leading_slash() {
    let index = sample_index();
    assert_eq!(
      index.list_assets("multiple/1.0.0"),
      index.list_assets("/multiple/1.0.0")
    );
    assert_eq!(index.list_assets("multiple/1.0.0").len(), 2);
  }

  #[test]
  fn rejects_empty_queries() {
    let index = sample_index();
    for query in ["", "/"] {
      assert!(
        matches!(index.full_path(query), Err(LocatorError::InvalidArgument(_))),
        "query {query:?}"
      );
    }
  }

  #[test]
  fn strips_only_one_leading_slash() {
    let index = sample_index();
    assert_eq!(
      index.full_path("//jquery.js"),
      Err(LocatorError::NotFound("//jquery.js".into()))
    );
    assert_eq!(
      index.full_path("/jquery.js").unwrap(),
      format!("{NS}/jquery/1.8.3/jquery.js")
    );
  }

  #[test]
  fn discovers_and_indexes_assets_under_custom_namespace() {
    use crate::asset_paths::AssetFilter;
    use std::fs;
    use tempfile::tempdir;

    let temp = tempdir().unwrap();
    for relative in ["jquery/1.8.3/jquery.js", "jquery/1.8.3/jquery.min.js"] {
      let file = temp.path().join("static/vendor").join(relative);
      fs::create_dir_all(file.parent().unwrap()).unwrap();
      fs::write(&file, "content").unwrap();
    }

    let roots = vec![temp.path().to_path_buf()];
    let index =
      PathIndex::discover(Some(roots.as_slice()), "/static/vendor/", &AssetFilter::all()).unwrap();

    assert_eq!(index.namespace(), "static/vendor");
    assert_eq!(index.len(), 2);
    assert_eq!(
      index.full_path("1.8.3/jquery.js").unwrap(),
      "static/vendor/jquery/1.8.3/jquery.js"
    );
    assert_eq!(index.list_assets("/jquery/1.8.3").len(), 2);
  }

  #[test]
  fn discover_requires_search_roots() {
    use crate::asset_paths::AssetFilter;

    let err = PathIndex::discover(None, WEBJARS_PATH_PREFIX, &AssetFilter::all()).unwrap_err();
    assert!(matches!(err, DiscoveryError::MissingRoots));
  }

  #[test]
  fn list_under_uses_literal_prefix() {
    let index = sample_index();
    let listed = index.list_under(&format!("{NS}/multiple/"));
    assert_eq!(listed.len(), 4);
    assert!(listed.iter().all(|path| path.starts_with(&format!("{NS}/multiple/"))));
    assert!(index.list_under("nothing-here").is_empty());
  }

  #[test]
  fn index_is_shareable_across_threads() {
    let index = sample_index();
    std::thread::scope(|scope| {
      for _ in 0..4 {
        scope.spawn(|| {
          assert!(index.full_path("jquery.js").is_ok());
        });
      }
    });
  }
}
