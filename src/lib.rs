#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod config;
pub mod discovery;
pub mod error;
pub mod index;
pub mod logging;
pub mod models;
pub mod resolver;
pub mod selection;

#[cfg(test)]
mod test_support;

pub use config::LocatorConfig;
pub use error::{ConfigError, DiscoveryError, LocatorError, LocatorResult, SelectionError};
pub use index::{PathIndex, WEBJARS_PATH_PREFIX};
pub use resolver::{AssetRef, OwnedAssetRef};
pub use selection::{AssetInclusion, LibrarySelection};
