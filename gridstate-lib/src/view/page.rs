//! Pagination math and the render model.

use crate::model::FieldSpec;
use crate::model::Record;

/// Pagination state of a rendered view.
///
/// `window_start`/`window_end` are 1-based row indices of the visible
/// slice ("showing 11-20 of 34"); `page_window` is the run of page numbers
/// a pager control should offer, the current page plus up to two
/// neighbours on each side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page, 1-based.
    pub current_page: usize,
    /// Total pages, at least 1.
    pub total_pages: usize,
    /// 1-based index of the first row on this page (0 when empty).
    pub window_start: usize,
    /// 1-based index of the last row on this page (0 when empty).
    pub window_end: usize,
    /// Page numbers the pager should render.
    pub page_window: Vec<usize>,
    /// Whether a previous page exists.
    pub has_prev: bool,
    /// Whether a next page exists.
    pub has_next: bool,
}

/// Returns the page count for a row count, never less than 1.
pub fn total_pages(row_count: usize, items_per_page: usize) -> usize {
    row_count.div_ceil(items_per_page.max(1)).max(1)
}

/// Clamps a requested page into `[1, total_pages]`.
///
/// Page navigation never fails: zero clamps to 1 and beyond-range clamps
/// to the last page.
pub fn clamp_page(requested: usize, row_count: usize, items_per_page: usize) -> usize {
    requested.clamp(1, total_pages(row_count, items_per_page))
}

/// Computes the pagination state for a page of a row count.
pub fn page_info(current_page: usize, row_count: usize, items_per_page: usize) -> PageInfo {
    let total = total_pages(row_count, items_per_page);
    let current = current_page.clamp(1, total);

    let (start, end) = if row_count == 0 {
        (0, 0)
    } else {
        let start = (current - 1) * items_per_page + 1;
        let end = (start + items_per_page - 1).min(row_count);
        (start, end)
    };

    let window_from = current.saturating_sub(2).max(1);
    let window_to = (current + 2).min(total);

    PageInfo {
        current_page: current,
        total_pages: total,
        window_start: start,
        window_end: end,
        page_window: (window_from..=window_to).collect(),
        has_prev: current > 1,
        has_next: current < total,
    }
}

/// Returns the row slice for a page.
pub fn page_slice(rows: &[Record], current_page: usize, items_per_page: usize) -> &[Record] {
    let current = clamp_page(current_page, rows.len(), items_per_page);
    let start = (current - 1) * items_per_page;
    let end = (start + items_per_page).min(rows.len());
    &rows[start.min(rows.len())..end]
}

/// Everything a presentation layer needs to draw the table.
///
/// Produced by [`TableController::render`](crate::controller::TableController::render);
/// pure data, no DOM or terminal assumptions.
#[derive(Debug, Clone)]
pub struct RenderModel {
    /// Visible field specs, in column order.
    pub header_fields: Vec<FieldSpec>,
    /// The current page of filtered, sorted rows.
    pub rows: Vec<Record>,
    /// Pager state.
    pub pagination: PageInfo,
    /// Row count of the whole filtered view, across all pages.
    pub total_count: usize,
}
