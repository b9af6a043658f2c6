//! Loads the embedded dataset and configuration into a mounted view.

use anyhow::Context;
use chrono::{DateTime, Utc};

use catalog_products::Catalog;

use crate::config::ViewConfig;
use crate::view::CatalogView;

/// Product records shipped with the page.
pub const EMBEDDED_DATASET: &str = include_str!("../data/products.json");

/// View configuration shipped with the page.
pub const EMBEDDED_CONFIG: &str = include_str!("../data/view.json");

pub fn load_catalog(document: &str) -> anyhow::Result<Catalog> {
    Catalog::from_json(document).context("failed to load product dataset")
}

pub fn load_config(document: &str) -> anyhow::Result<ViewConfig> {
    ViewConfig::from_json(document).context("failed to load view configuration")
}

/// Build the view from the embedded assets, as the page does on startup.
pub fn mount_embedded(now: DateTime<Utc>) -> anyhow::Result<CatalogView> {
    let catalog = load_catalog(EMBEDDED_DATASET)?;
    let config = load_config(EMBEDDED_CONFIG)?;
    let view = CatalogView::mount(catalog, config, now).context("failed to mount catalog view")?;

    tracing::info!(
        records = view.catalog().len(),
        visible = view.result_len(),
        categories = view.labels().categories().count(),
        "catalog view mounted"
    );
    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_assets_load() {
        let view = mount_embedded(Utc::now()).unwrap();
        assert!(!view.catalog().is_empty());
        assert!(view.labels().has_category("Electronics"));
    }

    #[test]
    fn errors_carry_context() {
        let err = load_catalog("[{\"id\": 1}]").unwrap_err();
        let rendered = format!("{err:#}");
        assert!(rendered.starts_with("failed to load product dataset"));
        assert!(rendered.contains("malformed dataset"));
    }

    #[test]
    fn config_errors_carry_context() {
        let err = load_config(r#"{"page_size": 0}"#).unwrap_err();
        assert!(format!("{err:#}").contains("invalid configuration"));
    }
}
