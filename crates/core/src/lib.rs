//! `catalog-core`: building blocks shared by the catalog crates.
//!
//! This crate contains **pure** primitives (no UI, no IO).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{CatalogError, CatalogResult};
pub use id::ProductId;
pub use value_object::{Bounds, ValueObject};
