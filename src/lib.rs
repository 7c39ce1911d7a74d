pub mod cli;
pub mod config;
pub mod observability;

pub use config::Config;

use std::path::PathBuf;
use weekmenu_shared::dish::Catalog;

/// Loads the catalog from `path_override`, the configured path, or the
/// embedded default, in that order.
pub fn load_catalog(config: &Config, path_override: Option<PathBuf>) -> Catalog {
    let path = path_override.or_else(|| config.catalog.path.clone());

    weekmenu_catalog::load_or_embedded(path.as_deref())
}
