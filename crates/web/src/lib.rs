//! `catalog-web`
//!
//! **Responsibility:** the product catalog page.
//!
//! This crate provides:
//! - View configuration and the embedded dataset bootstrap
//! - Column definitions and cell formatting
//! - `CatalogView`, the DOM-free state controller behind the page
//! - The Leptos frontend (wasm32 only)

pub mod bootstrap;
pub mod columns;
pub mod config;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use columns::{ColumnDef, ColumnVisibility, cell_text, column_defs};
pub use config::ViewConfig;
pub use view::{CatalogView, default_criteria};
