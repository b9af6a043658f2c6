//! State of the catalog page and the transitions user events trigger.
//!
//! The browser components only read from and call into [`CatalogView`];
//! nothing here touches the DOM, so every interaction can be tested natively.

use chrono::{DateTime, NaiveDate, Utc};

use catalog_core::{Bounds, CatalogError, CatalogResult};
use catalog_products::{Catalog, CatalogLabels, ProductRecord};
use catalog_query::{
    Column, EditDistanceMatcher, Evaluator, FilterCriteria, Page, PageState, SortSpec,
    paginate, sort_indices, whole_days,
};

use crate::columns::ColumnVisibility;
use crate::config::ViewConfig;

/// Criteria a freshly mounted view starts with: the configured price range
/// and everything from the Unix epoch up to `now`.
pub fn default_criteria(config: &ViewConfig, now: DateTime<Utc>) -> FilterCriteria {
    FilterCriteria::default()
        .with_price_range(config.default_price_range)
        .with_created_range(Bounds::ordered(DateTime::<Utc>::UNIX_EPOCH, now))
}

/// Everything the catalog page shows, plus the memoized filter result.
///
/// Page policy: any change to the criteria, the sort or the page size goes
/// back to the first page. Direct navigation is clamped to the last page.
#[derive(Debug, Clone)]
pub struct CatalogView {
    catalog: Catalog,
    config: ViewConfig,
    evaluator: Evaluator,
    criteria: FilterCriteria,
    draft: Option<FilterCriteria>,
    sort: Option<SortSpec>,
    page: PageState,
    visibility: ColumnVisibility,
    /// Indices into the catalog of the filtered, sorted result.
    result: Vec<usize>,
}

impl CatalogView {
    pub fn mount(catalog: Catalog, config: ViewConfig, now: DateTime<Utc>) -> CatalogResult<Self> {
        let config = config.validated()?;
        let page = PageState::first(config.page_size_nonzero()?);
        let matcher = EditDistanceMatcher::with_threshold(config.fuzzy_threshold);
        let evaluator = Evaluator::with_matcher(matcher).missing_price(config.missing_price);
        let criteria = default_criteria(&config, now);

        let mut view = Self {
            catalog,
            config,
            evaluator,
            criteria,
            draft: None,
            sort: None,
            page,
            visibility: ColumnVisibility::default(),
            result: Vec::new(),
        };
        view.recompute();
        Ok(view)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn labels(&self) -> &CatalogLabels {
        self.catalog.labels()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn page_state(&self) -> PageState {
        self.page
    }

    pub fn visibility(&self) -> &ColumnVisibility {
        &self.visibility
    }

    /// Number of records passing the current criteria.
    pub fn result_len(&self) -> usize {
        self.result.len()
    }

    /// Current page of the result, as catalog indices.
    pub fn page(&self) -> Page<'_, usize> {
        paginate(&self.result, self.page)
    }

    pub fn page_count(&self) -> usize {
        self.page().page_count()
    }

    /// Records on the current page, in display order.
    pub fn visible_rows(&self) -> Vec<&ProductRecord> {
        let records = self.catalog.records();
        self.page().items().iter().map(|&i| &records[i]).collect()
    }

    pub fn status_line(&self) -> String {
        let page = self.page();
        if page.total() == 0 {
            return "No products match the current filters".to_string();
        }
        format!(
            "Showing {}-{} of {} products",
            page.first_row(),
            page.last_row(),
            page.total()
        )
    }

    // Pagination

    /// Jump to a one-based page number, clamped to the existing pages.
    pub fn go_to_page(&mut self, page_number: usize) {
        let requested = self.page.with_page_index(page_number.saturating_sub(1));
        let clamped = requested.clamped(self.result.len());
        if clamped != requested {
            tracing::warn!(
                requested = page_number,
                page_count = self.page_count(),
                "page out of range; clamping"
            );
        }
        self.page = clamped;
        tracing::debug!(page_index = self.page.page_index(), "page changed");
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page.page_index() + 2);
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.page.page_index());
    }

    /// Only sizes offered by `page_size_options` are accepted.
    pub fn set_page_size(&mut self, page_size: usize) -> CatalogResult<()> {
        if !self.config.page_size_options.contains(&page_size) {
            tracing::warn!(
                page_size,
                options = ?self.config.page_size_options,
                "page size rejected"
            );
            return Err(CatalogError::validation(format!(
                "page size {page_size} is not one of {:?}",
                self.config.page_size_options
            )));
        }
        self.page = self.page.with_page_size(page_size)?;
        tracing::debug!(page_size, "page size changed");
        Ok(())
    }

    // Criteria

    /// Replace the criteria directly (without the dialog).
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.page = self.page.with_page_index(0);
        self.recompute();
    }

    pub fn toggle_sort(&mut self, column: Column) {
        self.sort = SortSpec::cycle(self.sort, column);
        self.page = self.page.with_page_index(0);
        tracing::debug!(sort = ?self.sort, "sort changed");
        self.recompute();
    }

    pub fn toggle_column(&mut self, column: Column) -> bool {
        self.visibility.toggle(column)
    }

    /// Toolbar shortcut for showing/hiding the Category column.
    pub fn toggle_category_column(&mut self) -> bool {
        self.toggle_column(Column::Category)
    }

    /// Swap in a different dataset. Labels are re-derived by the new
    /// catalog; the criteria are kept.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        if self.catalog.same_dataset(&catalog) {
            return;
        }
        self.catalog = catalog;
        self.page = self.page.with_page_index(0);
        self.recompute();
    }

    // Filter dialog

    pub fn is_filter_dialog_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> Option<&FilterCriteria> {
        self.draft.as_ref()
    }

    /// Open the dialog on a copy of the applied criteria.
    pub fn open_filters(&mut self) {
        self.draft = Some(self.criteria.clone());
    }

    /// Close the dialog, discarding edits.
    pub fn cancel_filters(&mut self) {
        if self.draft.take().is_some() {
            tracing::debug!("filter edits discarded");
        }
    }

    /// Close the dialog, applying edits.
    pub fn apply_filters(&mut self) {
        if let Some(draft) = self.draft.take() {
            tracing::debug!(?draft, "filters applied");
            self.set_criteria(draft);
        }
    }

    /// Edit the draft in place. Returns `false` when the dialog is closed.
    pub fn edit_draft(&mut self, edit: impl FnOnce(&mut FilterCriteria)) -> bool {
        match self.draft.as_mut() {
            Some(draft) => {
                edit(draft);
                true
            }
            None => false,
        }
    }

    pub fn set_draft_name(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        self.edit_draft(|d| d.name = name)
    }

    /// Labels that do not occur in the dataset are ignored.
    pub fn toggle_draft_category(&mut self, label: &str) -> bool {
        if !self.catalog.labels().has_category(label) {
            return false;
        }
        self.edit_draft(|d| {
            d.toggle_category(label);
        })
    }

    pub fn toggle_draft_subcategory(&mut self, label: &str) -> bool {
        if !self.catalog.labels().has_subcategory(label) {
            return false;
        }
        self.edit_draft(|d| {
            d.toggle_subcategory(label);
        })
    }

    /// Set the draft price range from the two slider thumbs, in either order,
    /// clamped to the slider limits.
    pub fn set_draft_price_range(&mut self, a: f64, b: f64) -> bool {
        if a.is_nan() || b.is_nan() {
            return false;
        }
        let slider = self.config.price_slider;
        let clamp = |v: f64| v.clamp(*slider.min(), *slider.max());
        let range = Bounds::ordered(clamp(a), clamp(b));
        self.edit_draft(|d| d.price_range = Some(range))
    }

    /// Set the draft created-at range from two whole days (both inclusive).
    pub fn set_draft_created_days(
        &mut self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> CatalogResult<bool> {
        let range = whole_days(from, to)?;
        Ok(self.edit_draft(|d| d.created_range = Some(range)))
    }

    fn recompute(&mut self) {
        let records = self.catalog.records();
        let mut result = self.evaluator.evaluate(records, &self.criteria);
        if let Some(spec) = self.sort {
            sort_indices(records, &mut result, spec);
        }
        tracing::debug!(
            matched = result.len(),
            total = records.len(),
            "catalog view recomputed"
        );
        self.result = result;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{Entity, ProductId};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    fn catalog(n: i64) -> Catalog {
        let records = (1..=n)
            .map(|i| {
                ProductRecord::new(
                    i,
                    format!("Item {i}"),
                    if i % 2 == 0 { "Even" } else { "Odd" },
                    "All",
                    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                )
                .with_price(Some(i as f64))
            })
            .collect();
        Catalog::from_records(records).unwrap()
    }

    fn view(n: i64) -> CatalogView {
        CatalogView::mount(catalog(n), ViewConfig::default(), now()).unwrap()
    }

    fn visible_ids(view: &CatalogView) -> Vec<i64> {
        view.visible_rows()
            .iter()
            .map(|r| match r.id() {
                ProductId::Numeric(n) => *n,
                other => panic!("unexpected id {other}"),
            })
            .collect()
    }

    #[test]
    fn mount_applies_configured_defaults() {
        let view = view(150);
        assert_eq!(view.result_len(), 100);
        assert_eq!(view.page_count(), 10);
        assert_eq!(visible_ids(&view), (1..=10).collect::<Vec<_>>());
        assert_eq!(view.status_line(), "Showing 1-10 of 100 products");
    }

    #[test]
    fn mount_rejects_invalid_config() {
        let config = ViewConfig {
            page_size: 0,
            ..ViewConfig::default()
        };
        assert!(CatalogView::mount(catalog(3), config, now()).is_err());
    }

    #[test]
    fn go_to_page_is_one_based_and_clamped() {
        let mut view = view(25);
        view.go_to_page(3);
        assert_eq!(visible_ids(&view), vec![21, 22, 23, 24, 25]);
        view.go_to_page(9);
        assert_eq!(view.page_state().page_index(), 2);
        view.go_to_page(0);
        assert_eq!(view.page_state().page_index(), 0);
    }

    #[test]
    fn next_and_previous_stop_at_the_ends() {
        let mut view = view(15);
        view.previous_page();
        assert_eq!(view.page_state().page_index(), 0);
        view.next_page();
        view.next_page();
        assert_eq!(view.page_state().page_index(), 1);
        assert_eq!(visible_ids(&view), vec![11, 12, 13, 14, 15]);
    }

    #[test]
    fn narrowing_filters_returns_to_first_page() {
        let mut view = view(40);
        view.go_to_page(4);
        view.set_criteria(view.criteria().clone().with_categories(["Even"]));
        assert_eq!(view.page_state().page_index(), 0);
        assert_eq!(visible_ids(&view), vec![2, 4, 6, 8, 10, 12, 14, 16, 18, 20]);
    }

    #[test]
    fn page_size_change_returns_to_first_page() {
        let mut view = view(60);
        view.go_to_page(3);
        view.set_page_size(25).unwrap();
        assert_eq!(view.page_state().page_index(), 0);
        assert_eq!(view.page_count(), 3);
        assert!(view.set_page_size(0).is_err());
    }

    #[test]
    fn page_size_must_be_an_offered_option() {
        let mut view = view(60);
        view.go_to_page(2);

        let err = view.set_page_size(7).unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
        assert_eq!(view.page_state().page_size(), 10);
        assert_eq!(view.page_state().page_index(), 1);

        view.set_page_size(50).unwrap();
        assert_eq!(view.page_state().page_size(), 50);
    }

    #[test]
    fn unknown_labels_are_not_added_to_the_draft() {
        let mut view = view(4);
        view.open_filters();
        assert!(!view.toggle_draft_category("Missing"));
        assert!(!view.toggle_draft_subcategory("Missing"));
        assert!(view.toggle_draft_subcategory("All"));
        let draft = view.draft().unwrap();
        assert!(draft.categories.is_empty());
        assert!(draft.subcategories.contains("All"));
    }

    #[test]
    fn dialog_cancel_discards_and_apply_commits() {
        let mut view = view(30);
        assert!(!view.set_draft_name("Item 3"));

        view.open_filters();
        assert!(view.toggle_draft_category("Odd"));
        view.cancel_filters();
        assert!(view.criteria().categories.is_empty());
        assert_eq!(view.result_len(), 30);

        view.open_filters();
        view.toggle_draft_category("Odd");
        assert_eq!(view.result_len(), 30);
        view.apply_filters();
        assert!(!view.is_filter_dialog_open());
        assert_eq!(view.result_len(), 15);
    }

    #[test]
    fn draft_price_range_is_ordered_and_clamped() {
        let mut view = view(5);
        view.open_filters();
        view.set_draft_price_range(500.0, 2.0);
        let range = view.draft().unwrap().price_range.unwrap();
        assert_eq!((*range.min(), *range.max()), (2.0, 200.0));
    }

    #[test]
    fn draft_dates_cover_whole_days() {
        let mut view = view(5);
        view.open_filters();
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(view.set_draft_created_days(day, day).unwrap());
        view.apply_filters();
        assert_eq!(view.result_len(), 5);

        view.open_filters();
        let later = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        view.set_draft_created_days(later, later).unwrap();
        view.apply_filters();
        assert_eq!(view.result_len(), 0);
        assert_eq!(view.status_line(), "No products match the current filters");
        assert_eq!(view.page_count(), 0);
        assert!(view.visible_rows().is_empty());
    }

    #[test]
    fn sorting_reorders_the_whole_result() {
        let mut view = view(30);
        view.go_to_page(2);
        view.toggle_sort(Column::Price);
        view.toggle_sort(Column::Price);
        assert_eq!(view.page_state().page_index(), 0);
        assert_eq!(visible_ids(&view), (21..=30).rev().collect::<Vec<_>>());

        view.toggle_sort(Column::Price);
        assert_eq!(view.sort(), None);
        assert_eq!(visible_ids(&view), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn category_column_toggles() {
        let mut view = view(3);
        assert!(!view.toggle_category_column());
        assert!(!view.visibility().is_visible(Column::Category));
        assert!(view.toggle_category_column());
    }

    #[test]
    fn replacing_the_catalog_rederives_labels() {
        let mut view = view(4);
        assert!(view.labels().has_category("Even"));

        let other = Catalog::from_records(vec![ProductRecord::new(
            1i64,
            "Solo",
            "Single",
            "One",
            Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        )
        .with_price(Some(1.0))])
        .unwrap();
        view.replace_catalog(other);

        assert!(view.labels().has_category("Single"));
        assert!(!view.labels().has_category("Even"));
        assert_eq!(view.result_len(), 1);
    }
}
