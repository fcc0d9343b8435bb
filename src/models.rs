//! Serializable records emitted by the command line front end.

use serde::Serialize;

/// Outcome of resolving one partial path.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionRecord {
  /// Partial path that was looked up.
  pub query: String,
  /// Resolved full path when the query was unique.
  pub full_path: Option<String>,
  /// Failure message when the query did not resolve.
  pub error: Option<String>,
}

impl ResolutionRecord {
  /// Build a record from a lookup result.
  pub fn from_result<E: std::fmt::Display>(query: &str, result: Result<&str, E>) -> Self {
    match result {
      Ok(path) => Self {
        query: query.to_string(),
        full_path: Some(path.to_string()),
        error: None,
      },
      Err(err) => Self {
        query: query.to_string(),
        full_path: None,
        error: Some(err.to_string()),
      },
    }
  }
}

/// Assets found below a folder.
#[derive(Debug, Clone, Serialize)]
pub struct ListingRecord {
  /// Folder that was listed, relative to the namespace.
  pub folder: String,
  /// Full paths of every asset below the folder.
  pub assets: Vec<String>,
}
