pub mod engine;
pub mod metadata;
pub mod page;
pub mod resolver;
pub mod share;
pub mod sitemap;

pub use crate::domain::model::{
    Catalog, ColorVariant, Phone, ResolvedComparison, Role, RoleSelection, SelectionInput,
};
pub use crate::domain::ports::{CatalogSource, ConfigProvider, Storage};
pub use crate::utils::error::Result;
