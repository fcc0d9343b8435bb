use regex::Regex;

use crate::error::DiscoveryError;

fn match_everything() -> &'static Regex {
    use std::sync::OnceLock;

    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(?s:.*)$").expect("invalid catch-all regex"))
}

/// Regular-expression predicate deciding which candidate paths enter the index.
///
/// The expression must match the whole candidate, not just a substring of it.
#[derive(Debug, Clone)]
pub struct AssetFilter {
    pattern: Regex,
}

impl AssetFilter {
    /// Compile a filter from a regular expression.
    pub fn new(expression: &str) -> Result<Self, DiscoveryError> {
        let pattern = Regex::new(&format!("^(?:{expression})$"))?;
        Ok(Self { pattern })
    }

    /// A filter that accepts every candidate.
    pub fn all() -> Self {
        Self {
            pattern: match_everything().clone(),
        }
    }

    /// Whether the candidate path is accepted.
    pub fn matches(&self, candidate: &str) -> bool {
        self.pattern.is_match(candidate)
    }
}

impl Default for AssetFilter {
    fn default() -> Self {
        Self::all()
    }
}
