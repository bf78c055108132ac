//! View derivation: search, filter, sort, and pagination.
//!
//! The view is ephemeral, derived state. Any change to its inputs
//! recomputes the filtered and sorted row set from the source dataset in
//! full; nothing here is ever partially stale or stacked destructively.

mod filter;
mod page;
mod sort;

pub use filter::*;
pub use page::*;
pub use sort::*;

use crate::model::FieldSpec;
use crate::model::Record;

/// The ephemeral inputs a table view is derived from.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Active search query; blank imposes no constraint.
    pub search_query: String,
    /// Active sort, if any.
    pub sort: Option<SortState>,
    /// Active structural filter selections.
    pub filters: FilterSelections,
    /// Current page, 1-based.
    pub current_page: usize,
}

impl ViewState {
    /// Creates a fresh view state on page 1 with no constraints.
    pub fn new() -> Self {
        Self {
            search_query: String::new(),
            sort: None,
            filters: FilterSelections::new(),
            current_page: 1,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Derives the filtered, sorted row set from the source dataset.
///
/// Search and structural filters are AND-composed, so applying them in
/// either order yields the same set. Sorting is stable.
pub fn derive_rows(dataset: &[Record], fields: &[FieldSpec], state: &ViewState) -> Vec<Record> {
    let mut rows: Vec<Record> = dataset
        .iter()
        .filter(|record| matches_query(record, fields, &state.search_query))
        .filter(|record| state.filters.matches(record, fields))
        .cloned()
        .collect();

    if let Some(sort) = &state.sort {
        sort_records(&mut rows, fields, sort);
    }

    rows
}
