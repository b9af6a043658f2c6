//! The loaded dataset and the labels derived from it.

use std::collections::{BTreeSet, HashSet};
use std::sync::{Arc, OnceLock};

use catalog_core::{CatalogError, CatalogResult, Entity};

use crate::product::ProductRecord;

/// Distinct category and subcategory labels found in a dataset.
///
/// Sorted so filter option lists render in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogLabels {
    categories: BTreeSet<String>,
    subcategories: BTreeSet<String>,
}

impl CatalogLabels {
    pub fn derive(records: &[ProductRecord]) -> Self {
        let mut labels = Self::default();
        for record in records {
            labels.categories.insert(record.category().to_string());
            labels.subcategories.insert(record.subcategory().to_string());
        }
        labels
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    pub fn subcategories(&self) -> impl Iterator<Item = &str> {
        self.subcategories.iter().map(String::as_str)
    }

    pub fn has_category(&self, label: &str) -> bool {
        self.categories.contains(label)
    }

    pub fn has_subcategory(&self, label: &str) -> bool {
        self.subcategories.contains(label)
    }
}

/// Immutable handle to a validated product dataset.
///
/// Cloning is cheap and shares both the records and the memoized labels.
/// Building a new `Catalog` is the only way to change the data, and it starts
/// with an empty label cache.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Arc<[ProductRecord]>,
    labels: Arc<OnceLock<CatalogLabels>>,
}

impl Catalog {
    /// Validate records and take ownership of them.
    pub fn from_records(records: Vec<ProductRecord>) -> CatalogResult<Self> {
        {
            let mut seen = HashSet::with_capacity(records.len());
            for record in &records {
                record.validate()?;
                if !seen.insert(record.id()) {
                    return Err(CatalogError::duplicate_id(record.id()));
                }
            }
        }

        tracing::info!(records = records.len(), "product catalog loaded");

        Ok(Self {
            records: records.into(),
            labels: Arc::new(OnceLock::new()),
        })
    }

    /// Parse a JSON array of records (the embedded dataset format).
    pub fn from_json(document: &str) -> CatalogResult<Self> {
        let records: Vec<ProductRecord> = serde_json::from_str(document)?;
        Self::from_records(records)
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Category/subcategory options, derived on first use and cached for the
    /// lifetime of this dataset.
    pub fn labels(&self) -> &CatalogLabels {
        self.labels.get_or_init(|| {
            tracing::debug!(records = self.records.len(), "deriving catalog labels");
            CatalogLabels::derive(&self.records)
        })
    }

    /// True when both handles point at the same loaded dataset.
    pub fn same_dataset(&self, other: &Catalog) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }
}
