//! Filter/search evaluator.

use catalog_products::ProductRecord;

use crate::criteria::{FilterCriteria, MissingPricePolicy};
use crate::fuzzy::{EditDistanceMatcher, FuzzyMatcher};

/// Applies [`FilterCriteria`] to a dataset.
///
/// A record is kept when it passes every predicate (name, category,
/// subcategory, price, created-at). Within the category and subcategory
/// selections any one label is enough.
///
/// Name policy: a non-blank query keeps exactly the fuzzy hits. When the
/// engine finds nothing, nothing is kept.
#[derive(Debug, Clone, Default)]
pub struct Evaluator<M = EditDistanceMatcher> {
    matcher: M,
    missing_price: MissingPricePolicy,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: FuzzyMatcher> Evaluator<M> {
    pub fn with_matcher(matcher: M) -> Self {
        Self {
            matcher,
            missing_price: MissingPricePolicy::default(),
        }
    }

    pub fn missing_price(mut self, policy: MissingPricePolicy) -> Self {
        self.missing_price = policy;
        self
    }

    /// Indices of the records that pass, in dataset order.
    pub fn evaluate(&self, records: &[ProductRecord], criteria: &FilterCriteria) -> Vec<usize> {
        if criteria.is_unconstrained() {
            return (0..records.len()).collect();
        }

        let name_mask = criteria.name_query().map(|query| {
            let mut mask = vec![false; records.len()];
            for hit in self.matcher.search(records, query) {
                if let Some(slot) = mask.get_mut(hit.index) {
                    *slot = true;
                }
            }
            mask
        });

        let kept: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(i, record)| {
                name_mask.as_ref().is_none_or(|mask| mask[*i])
                    && self.matches_fields(record, criteria)
            })
            .map(|(i, _)| i)
            .collect();

        tracing::debug!(
            total = records.len(),
            kept = kept.len(),
            query = criteria.name_query().unwrap_or(""),
            "catalog filter evaluated"
        );
        kept
    }

    /// Every predicate except the name search.
    pub fn matches_fields(&self, record: &ProductRecord, criteria: &FilterCriteria) -> bool {
        let category_ok =
            criteria.categories.is_empty() || criteria.categories.contains(record.category());
        let subcategory_ok = criteria.subcategories.is_empty()
            || criteria.subcategories.contains(record.subcategory());
        let price_ok = match (&criteria.price_range, record.price()) {
            (None, _) => true,
            (Some(range), Some(price)) => range.contains(&price),
            (Some(_), None) => self.missing_price == MissingPricePolicy::Include,
        };
        let date_ok = criteria
            .created_range
            .as_ref()
            .is_none_or(|range| range.contains(&record.created_at()));

        category_ok && subcategory_ok && price_ok && date_ok
    }
}
