//! Paging of a filtered (and possibly sorted) result.

use core::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use catalog_core::{CatalogError, CatalogResult};

/// Zero-based page index plus a positive page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    page_index: usize,
    page_size: NonZeroUsize,
}

impl PageState {
    pub fn new(page_index: usize, page_size: usize) -> CatalogResult<Self> {
        let page_size = NonZeroUsize::new(page_size)
            .ok_or_else(|| CatalogError::validation("page size must be positive"))?;
        Ok(Self {
            page_index,
            page_size,
        })
    }

    /// First page at the given size.
    pub fn first(page_size: NonZeroUsize) -> Self {
        Self {
            page_index: 0,
            page_size,
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Offset of the first row of this page (saturating).
    pub fn offset(&self) -> usize {
        self.page_index.saturating_mul(self.page_size.get())
    }

    pub fn with_page_index(self, page_index: usize) -> Self {
        Self { page_index, ..self }
    }

    /// Changing the size always returns to the first page.
    pub fn with_page_size(self, page_size: usize) -> CatalogResult<Self> {
        Self::new(0, page_size)
    }

    /// Pull the index back onto the last page of a `total`-row result.
    /// An empty result clamps to page 0.
    pub fn clamped(self, total: usize) -> Self {
        let last = page_count(total, self.page_size).saturating_sub(1);
        Self {
            page_index: self.page_index.min(last),
            ..self
        }
    }
}

/// `ceil(total / page_size)`; 0 for an empty result.
pub fn page_count(total: usize, page_size: NonZeroUsize) -> usize {
    total.div_ceil(page_size.get())
}

/// The rows of one page and where it sits in the whole result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    items: &'a [T],
    page_index: usize,
    page_size: usize,
    page_count: usize,
    total: usize,
}

impl<'a, T> Page<'a, T> {
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Length of the whole result, not of this page.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// One-based number of the first row shown; 0 on an empty page.
    pub fn first_row(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.page_index * self.page_size + 1
        }
    }

    /// One-based number of the last row shown; 0 on an empty page.
    pub fn last_row(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.page_index * self.page_size + self.items.len()
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 0 && self.page_count > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.page_count
    }
}

/// Slice `[index*size, index*size + size)` out of `items`, clamped to its
/// bounds. An index past the end yields an empty page rather than an error.
pub fn paginate<T>(items: &[T], state: PageState) -> Page<'_, T> {
    let total = items.len();
    let start = state.offset().min(total);
    let end = start.saturating_add(state.page_size()).min(total);

    Page {
        items: &items[start..end],
        page_index: state.page_index(),
        page_size: state.page_size(),
        page_count: page_count(total, state.page_size),
        total,
    }
}
