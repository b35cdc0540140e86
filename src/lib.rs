pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::SupabaseCatalog;
pub use adapters::storage::{FileCatalog, LocalStorage};
pub use config::toml_config::TomlConfig;
pub use crate::core::{
    engine::ComparisonEngine,
    page::ComparisonPage,
    resolver::{resolve_comparison, resolve_role},
};
pub use domain::model::{Catalog, ColorVariant, Phone, SelectionInput};
pub use utils::error::{CompareError, Result};
