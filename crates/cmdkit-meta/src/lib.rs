//! Command metadata catalog and pre-built variants for command-kit

pub mod catalog;
pub mod error;
pub mod schema;
pub mod variant;

pub use catalog::{CatalogGroup, group, scan};
pub use error::{Error, Result};
pub use schema::{Category, CommandMeta, ORDER_SENTINEL};
pub use variant::{
    BUILTIN_VARIANTS, Variant, VariantSpec, builtin_variant, variant_for_flags, write_sidecar,
};
