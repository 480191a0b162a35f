//! The filter/sort/pagination state container for a job listing view.
//!
//! One store instance backs one browsing session. All mutations go through
//! the operations here; the central invariant is that changing any filter
//! criterion invalidates pagination context (page resets to 1 and the
//! server-reported metadata is cleared), while navigating between pages of
//! the same filtered set does not.

use tracing::debug;

use crate::models::filters::{
    FilterChange, JobFilterPatch, JobFilters, PaginationMeta,
};
use crate::query::QueryParams;

/// Immutable snapshot handed to subscribers after every mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSnapshot {
    pub filters: JobFilters,
    pub pagination: PaginationMeta,
    pub is_loading: bool,
}

/// Handle returned by `subscribe`, used to cancel delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&FilterSnapshot)>;

/// Holds the current filter state and notifies subscribers on change.
///
/// Single-threaded by design: the store is driven by one event loop per
/// instance, every operation completes synchronously, and no internal
/// locking exists. Create independent instances freely (tests do).
pub struct JobFilterStore {
    filters: JobFilters,
    pagination: PaginationMeta,
    is_loading: bool,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl Default for JobFilterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl JobFilterStore {
    pub fn new() -> Self {
        Self {
            filters: JobFilters::default(),
            pagination: PaginationMeta::default(),
            is_loading: false,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    // ── Read access (pure, recomputed on each call) ──

    pub fn filters(&self) -> &JobFilters {
        &self.filters
    }

    pub fn pagination(&self) -> PaginationMeta {
        self.pagination
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn active_filter_count(&self) -> usize {
        self.filters.active_filter_count()
    }

    pub fn has_active_filters(&self) -> bool {
        self.filters.has_active_filters()
    }

    pub fn query_params(&self) -> QueryParams {
        self.filters.query_params()
    }

    pub fn snapshot(&self) -> FilterSnapshot {
        FilterSnapshot {
            filters: self.filters.clone(),
            pagination: self.pagination,
            is_loading: self.is_loading,
        }
    }

    // ── Mutations ──

    /// Apply a filter change as a shallow merge. The contract is "the filter
    /// criteria changed": page is forced back to 1 and pagination metadata
    /// is cleared unconditionally, even for an empty patch or a patch that
    /// only carries `page`.
    pub fn set_filters(&mut self, patch: JobFilterPatch) {
        if let Some(location) = patch.location {
            self.filters.location = location;
        }
        if let Some(job_type) = patch.job_type {
            self.filters.job_type = job_type;
        }
        if let Some(search_term) = patch.search_term {
            self.filters.search_term = search_term;
        }
        if let Some(page) = patch.page {
            self.filters.page = page.max(1);
        }
        if let Some(limit) = patch.limit {
            self.filters.limit = limit;
        }
        if let Some(order_by) = patch.order_by {
            self.filters.order_by = order_by;
        }
        if let Some(order_direction) = patch.order_direction {
            self.filters.order_direction = order_direction;
        }
        self.filters.page = 1;
        self.pagination = PaginationMeta::default();
        debug!(filters = ?self.filters, "filters replaced");
        self.notify();
    }

    /// Set exactly one field. Any variant other than `Page` resets the page
    /// to 1 and clears pagination metadata; `Page` is pure navigation and
    /// resets nothing.
    pub fn apply(&mut self, change: FilterChange) {
        match change {
            FilterChange::Page(page) => {
                self.filters.page = page.max(1);
                self.notify();
                return;
            }
            FilterChange::Location(location) => self.filters.location = location,
            FilterChange::JobType(job_type) => self.filters.job_type = job_type,
            FilterChange::SearchTerm(term) => self.filters.search_term = term,
            FilterChange::Limit(limit) => self.filters.limit = limit,
            FilterChange::OrderBy(order_by) => self.filters.order_by = order_by,
            FilterChange::OrderDirection(dir) => self.filters.order_direction = dir,
        }
        self.filters.page = 1;
        self.pagination = PaginationMeta::default();
        self.notify();
    }

    /// Restore every filter field to its default and clear pagination
    /// metadata. Idempotent.
    pub fn clear_filters(&mut self) {
        self.filters = JobFilters::default();
        self.pagination = PaginationMeta::default();
        debug!("filters cleared");
        self.notify();
    }

    /// Force a re-page without altering filter criteria.
    pub fn reset_pagination(&mut self) {
        self.filters.page = 1;
        self.pagination = PaginationMeta::default();
        self.notify();
    }

    /// Navigate within the current filtered set. Pagination metadata stays
    /// valid and is not touched; out-of-range pages are the remote query's
    /// problem to reject. Pages below 1 clamp to 1.
    pub fn set_page(&mut self, page: u32) {
        self.filters.page = page.max(1);
        self.notify();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
        self.notify();
    }

    /// Record the server-reported counts for the current filter set. Called
    /// by the fetch layer after a successful listing request.
    pub fn set_pagination_meta(&mut self, total_jobs: u64, has_more: bool) {
        self.pagination = PaginationMeta {
            total_jobs,
            has_more,
        };
        debug!(total_jobs, has_more, "pagination metadata recorded");
        self.notify();
    }

    // ── Subscriptions ──

    /// Register a callback invoked with the post-mutation snapshot after
    /// every mutating operation.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&FilterSnapshot) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Cancel a subscription. Unknown ids are a no-op.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    fn notify(&self) {
        if self.subscribers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, callback) in &self.subscribers {
            callback(&snapshot);
        }
    }
}
