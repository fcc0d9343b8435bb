//! String-level helpers for working with `/`-separated asset paths.
//!
//! Asset paths are treated as plain strings rather than [`std::path::Path`] values, because
//! they identify resources inside archives and always use forward slashes regardless of the
//! host platform. The submodules keep reversal, lexical normalisation and candidate
//! filtering separate so each can be tested on its own.

mod filters;
mod normalize;
mod reversal;

pub use filters::AssetFilter;
pub use normalize::{normalize, parent_folder, strip_namespace};
pub use reversal::{prepend_slash, reverse_path};
