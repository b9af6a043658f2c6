//! Filter, search, sort and paging over a loaded product catalog.
//!
//! Every operation here is a pure function of its inputs: the dataset is
//! borrowed, never modified, and results are returned as new views.

pub mod column;
pub mod criteria;
pub mod evaluate;
pub mod fuzzy;
pub mod pager;
pub mod sort;

pub use column::Column;
pub use criteria::{FilterCriteria, MissingPricePolicy, whole_days};
pub use evaluate::Evaluator;
pub use fuzzy::{EditDistanceMatcher, FuzzyHit, FuzzyMatcher};
pub use pager::{Page, PageState, page_count, paginate};
pub use sort::{SortDirection, SortSpec, sort_indices};
