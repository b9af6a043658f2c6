//! View configuration.

use core::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use catalog_core::{Bounds, CatalogError, CatalogResult};
use catalog_query::MissingPricePolicy;
use catalog_query::fuzzy::DEFAULT_THRESHOLD;

/// Tunables of the catalog view. Every field has a default, so a partial
/// (or empty) JSON object is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    /// Outer limits of the price slider.
    pub price_slider: Bounds<f64>,
    /// Price range selected when the view mounts.
    pub default_price_range: Bounds<f64>,
    pub fuzzy_threshold: f64,
    pub missing_price: MissingPricePolicy,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            page_size_options: vec![10, 25, 50],
            price_slider: Bounds::ordered(0.0, 200.0),
            default_price_range: Bounds::ordered(0.0, 100.0),
            fuzzy_threshold: DEFAULT_THRESHOLD,
            missing_price: MissingPricePolicy::Exclude,
        }
    }
}

impl ViewConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(document: &str) -> CatalogResult<Self> {
        let config: ViewConfig =
            serde_json::from_str(document).map_err(|e| CatalogError::config(e.to_string()))?;
        config.validated()
    }

    /// Check invariants and normalize the page size options (sorted, no
    /// zeros or duplicates, always containing `page_size`).
    pub fn validated(mut self) -> CatalogResult<Self> {
        if self.page_size == 0 {
            return Err(CatalogError::config("page_size must be positive"));
        }

        self.page_size_options.retain(|&n| n > 0);
        if !self.page_size_options.contains(&self.page_size) {
            tracing::warn!(
                page_size = self.page_size,
                "page_size missing from page_size_options; adding it"
            );
            self.page_size_options.push(self.page_size);
        }
        self.page_size_options.sort_unstable();
        self.page_size_options.dedup();

        if *self.price_slider.min() < 0.0 {
            return Err(CatalogError::config("price_slider cannot start below zero"));
        }
        if !self.price_slider.encloses(&self.default_price_range) {
            return Err(CatalogError::config(format!(
                "default_price_range {:?} lies outside price_slider {:?}",
                self.default_price_range, self.price_slider
            )));
        }
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(CatalogError::config(format!(
                "fuzzy_threshold must be within [0, 1], got {}",
                self.fuzzy_threshold
            )));
        }
        Ok(self)
    }

    pub fn page_size_nonzero(&self) -> CatalogResult<NonZeroUsize> {
        NonZeroUsize::new(self.page_size)
            .ok_or_else(|| CatalogError::config("page_size must be positive"))
    }
}
