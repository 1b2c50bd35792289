//! State Store — owns the fetched record array and the three state
//! fragments, and recomputes the derived visible page on every change.
//!
//! Recomputation always runs filter → sort → paginate: filtering first so
//! the page count is correct, sorting before slicing so the page holds the
//! right records. It is synchronous and never refetches — only an explicit
//! refresh touches the record source, and a superseded in-flight refresh is
//! discarded via generation tickets.

#![allow(dead_code)]

use chrono::{NaiveDate, Utc};

use crate::models::MatchRecord;
use crate::pipeline::filters::{filter_records, FilterCriteria};
use crate::pipeline::pagination::{paginate, total_pages, PaginationSpec};
use crate::pipeline::sorting::{sort_records, SortSpec};
use crate::pipeline::summary::{summarize, FilterSummary};
use crate::pipeline::url_state::QueryState;

/// The derived output of the pipeline — what a screen renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisiblePage {
    pub items: Vec<MatchRecord>,
    pub total_pages: usize,
    /// Post-filter count across all pages.
    pub visible_count: usize,
    /// Unfiltered source-array count.
    pub total_count: usize,
}

/// Ticket identifying one refresh round-trip. Completing with a stale
/// ticket is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

#[derive(Debug, Clone)]
pub struct ResultStore {
    records: Vec<MatchRecord>,
    criteria: FilterCriteria,
    sort: SortSpec,
    pagination: PaginationSpec,
    today: NaiveDate,
    visible: VisiblePage,
    refresh_generation: u64,
}

impl ResultStore {
    pub fn new(records: Vec<MatchRecord>) -> Self {
        Self::with_today(records, Utc::now().date_naive())
    }

    /// Anchors the `days_posted` age check to a fixed date (tests).
    pub fn with_today(records: Vec<MatchRecord>, today: NaiveDate) -> Self {
        let mut store = Self {
            records,
            criteria: FilterCriteria::default(),
            sort: SortSpec::default(),
            pagination: PaginationSpec::default(),
            today,
            visible: VisiblePage::default(),
            refresh_generation: 0,
        };
        store.recompute();
        store
    }

    pub fn visible(&self) -> &VisiblePage {
        &self.visible
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn pagination(&self) -> &PaginationSpec {
        &self.pagination
    }

    /// Replaces the filter fragment. The result set changes shape, so the
    /// page index resets to 1.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.pagination.page = 1;
        self.recompute();
    }

    /// Replaces the sort fragment; resets the page index to 1.
    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
        self.pagination.page = 1;
        self.recompute();
    }

    /// Navigates to a page, clamped into `[1, total_pages]`.
    pub fn set_page(&mut self, page: usize) {
        self.pagination.page = page.clamp(1, self.visible.total_pages);
        self.recompute();
    }

    /// Changes the page size (snapped onto the offered set) and resets the
    /// page index to 1.
    pub fn set_page_size(&mut self, raw: usize) {
        self.pagination.page_size = PaginationSpec::coerce_page_size(raw);
        self.pagination.page = 1;
        self.recompute();
    }

    /// Swaps in a freshly fetched source array.
    pub fn replace_records(&mut self, records: Vec<MatchRecord>) {
        self.records = records;
        self.recompute();
    }

    /// Starts a refresh round-trip, invalidating any ticket still in
    /// flight.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.refresh_generation += 1;
        RefreshTicket(self.refresh_generation)
    }

    /// Lands a refresh. Returns false (and changes nothing) when a newer
    /// refresh superseded this ticket.
    pub fn complete_refresh(&mut self, ticket: RefreshTicket, records: Vec<MatchRecord>) -> bool {
        if ticket.0 != self.refresh_generation {
            tracing::debug!(
                ticket = ticket.0,
                current = self.refresh_generation,
                "discarding superseded refresh result"
            );
            return false;
        }
        self.replace_records(records);
        true
    }

    /// Seeds all three fragments from a decoded query string (screen mount).
    pub fn apply_query_state(&mut self, state: &QueryState) {
        self.criteria = state.criteria();
        self.sort = state.sort();
        self.pagination = state.pagination();
        self.recompute();
    }

    /// The canonical query-string view of the current fragments, for
    /// writing back to the address bar.
    pub fn query_state(&self) -> QueryState {
        QueryState::from_fragments(&self.criteria, &self.sort, &self.pagination)
    }

    pub fn summary(&self) -> FilterSummary {
        summarize(
            &self.criteria,
            self.visible.visible_count,
            self.visible.total_count,
        )
    }

    /// filter → sort → paginate, in that fixed order. A page index that the
    /// narrowed set no longer reaches resets to 1 before slicing.
    fn recompute(&mut self) {
        let filtered = filter_records(&self.records, &self.criteria, self.today);
        let visible_count = filtered.len();
        let sorted = sort_records(&filtered, &self.sort);

        let pages = total_pages(visible_count, self.pagination.page_size);
        if self.pagination.page > pages {
            self.pagination.page = 1;
        }

        let page = paginate(&sorted, &self.pagination);
        self.visible = VisiblePage {
            items: page.page_items,
            total_pages: page.total_pages,
            visible_count,
            total_count: self.records.len(),
        };
    }
}
