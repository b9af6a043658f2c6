//! Column sorting of a filtered result.

use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use catalog_core::Entity;
use catalog_products::ProductRecord;

use crate::column::Column;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Active sort: one column, one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: Column,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(column: Column) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: Column) -> Self {
        Self {
            column,
            direction: SortDirection::Descending,
        }
    }

    /// Header-click cycle: unsorted → ascending → descending → unsorted.
    /// Clicking a different column starts that column at ascending.
    pub fn cycle(current: Option<SortSpec>, clicked: Column) -> Option<SortSpec> {
        match current {
            Some(spec) if spec.column == clicked => match spec.direction {
                SortDirection::Ascending => Some(Self::descending(clicked)),
                SortDirection::Descending => None,
            },
            _ => Some(Self::ascending(clicked)),
        }
    }

    /// Compare two records under this sort. Missing prices always go last.
    pub fn compare(&self, a: &ProductRecord, b: &ProductRecord) -> Ordering {
        let directed = |ord: Ordering| match self.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        };

        match self.column {
            Column::Id => directed(a.id().cmp(b.id())),
            Column::Name => directed(cmp_text(a.name(), b.name())),
            Column::Category => directed(cmp_text(a.category(), b.category())),
            Column::Subcategory => directed(cmp_text(a.subcategory(), b.subcategory())),
            Column::CreatedAt => directed(a.created_at().cmp(&b.created_at())),
            Column::Price => cmp_optional(a.price(), b.price(), directed),
            Column::SalePrice => cmp_optional(a.sale_price(), b.sale_price(), directed),
        }
    }
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

fn cmp_optional(
    a: Option<f64>,
    b: Option<f64>,
    directed: impl Fn(Ordering) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => directed(x.total_cmp(&y)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable in-place sort of record indices (as produced by the evaluator).
pub fn sort_indices(records: &[ProductRecord], indices: &mut [usize], spec: SortSpec) {
    indices.sort_by(|a, b| spec.compare(&records[*a], &records[*b]));
}
