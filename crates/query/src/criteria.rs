//! User-editable filter state.

use std::collections::BTreeSet;

use chrono::{DateTime, Days, NaiveDate, NaiveTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::{Bounds, CatalogResult, ValueObject};

/// What the price filter does with a record whose price is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingPricePolicy {
    /// A missing price never lies inside a range.
    #[default]
    Exclude,
    /// A missing price satisfies any range.
    Include,
}

/// The constraints narrowing the visible catalog.
///
/// Each field left at its default imposes no constraint:
/// - empty `name` matches every record,
/// - empty label sets match every label (not "match nothing"),
/// - `None` ranges match every price/date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub name: String,
    pub categories: BTreeSet<String>,
    pub subcategories: BTreeSet<String>,
    pub price_range: Option<Bounds<f64>>,
    pub created_range: Option<Bounds<DateTime<Utc>>>,
}

impl ValueObject for FilterCriteria {}

impl FilterCriteria {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_categories<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_subcategories<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subcategories = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_price_range(mut self, range: Bounds<f64>) -> Self {
        self.price_range = Some(range);
        self
    }

    pub fn with_created_range(mut self, range: Bounds<DateTime<Utc>>) -> Self {
        self.created_range = Some(range);
        self
    }

    /// The trimmed name query, or `None` when there is nothing to search for.
    pub fn name_query(&self) -> Option<&str> {
        let q = self.name.trim();
        (!q.is_empty()).then_some(q)
    }

    /// Toggle a category in the selection; returns whether it is now selected.
    pub fn toggle_category(&mut self, label: &str) -> bool {
        toggle(&mut self.categories, label)
    }

    pub fn toggle_subcategory(&mut self, label: &str) -> bool {
        toggle(&mut self.subcategories, label)
    }

    /// True when no field constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.name_query().is_none()
            && self.categories.is_empty()
            && self.subcategories.is_empty()
            && self.price_range.is_none()
            && self.created_range.is_none()
    }
}

fn toggle(set: &mut BTreeSet<String>, label: &str) -> bool {
    if set.remove(label) {
        false
    } else {
        set.insert(label.to_string());
        true
    }
}

/// Convert a pair of calendar days (as picked in date inputs) into an
/// inclusive timestamp range: `from` at 00:00:00 UTC through the last
/// millisecond of `to`.
pub fn whole_days(from: NaiveDate, to: NaiveDate) -> CatalogResult<Bounds<DateTime<Utc>>> {
    let start = from.and_time(NaiveTime::MIN).and_utc();
    let end = to
        .checked_add_days(Days::new(1))
        .map(|next| next.and_time(NaiveTime::MIN).and_utc() - TimeDelta::milliseconds(1))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);
    Bounds::new(start, end)
}
