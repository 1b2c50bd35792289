//! Pagination Controller — slices an ordered array into one page.

use crate::models::MatchRecord;

/// The page sizes the UI offers. Anything else is snapped to the default at
/// the edit boundary.
pub const PAGE_SIZES: [usize; 4] = [5, 10, 20, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationSpec {
    /// 1-based page index.
    pub page: usize,
    pub page_size: usize,
}

impl Default for PaginationSpec {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationSpec {
    /// Snaps a raw page-size value onto the offered set.
    pub fn coerce_page_size(raw: usize) -> usize {
        if PAGE_SIZES.contains(&raw) {
            raw
        } else {
            DEFAULT_PAGE_SIZE
        }
    }
}

/// One rendered page plus the page count for the pager control.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub page_items: Vec<MatchRecord>,
    pub total_pages: usize,
}

/// `ceil(total / page_size)`, minimum 1 even for an empty set so the pager
/// always has a current page to highlight.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if total == 0 {
        1
    } else {
        total.div_ceil(page_size)
    }
}

/// Slices `[(page-1)*page_size, page*page_size)` clamped to array bounds.
pub fn paginate(records: &[MatchRecord], spec: &PaginationSpec) -> Page {
    let pages = total_pages(records.len(), spec.page_size);
    let start = (spec.page.max(1) - 1)
        .saturating_mul(spec.page_size)
        .min(records.len());
    let end = (start + spec.page_size).min(records.len());
    Page {
        page_items: records[start..end].to_vec(),
        total_pages: pages,
    }
}
