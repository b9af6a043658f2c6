//! Product catalog data model.
//!
//! This crate holds the immutable product records and the dataset handle that
//! owns them, implemented purely as in-memory data (no IO, no UI).

pub mod catalog;
pub mod product;

pub use catalog::{Catalog, CatalogLabels};
pub use product::ProductRecord;
