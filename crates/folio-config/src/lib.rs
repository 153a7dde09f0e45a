mod backend;
mod catalog;
mod model;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use catalog::{load_catalog, load_catalog_from};
pub use model::SiteConfig;
pub use paths::{BASE_DIR_ENV, ConfigError, FolioPaths};

use once_cell::sync::Lazy;

// Singleton de paths (portable / system)
pub static PATHS: Lazy<FolioPaths> = Lazy::new(|| FolioPaths::detect().expect("failed to init FolioPaths"));

// Singleton del backend de config
pub static CONFIG_BACKEND: Lazy<TomlConfigBackend> = Lazy::new(|| TomlConfigBackend::new(PATHS.clone()));
