use super::filter::apply_filters;
use super::load::{CancelToken, LoadOutcome, LoadSequencer, LoadTicket};
use super::paginate::{clamp_page, page_bounds, total_pages, PageState, PageView};
use super::query::{FilterKind, Query};
use crate::feed::types::{FetchError, Project};
use crate::feed::ProjectStore;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Owns the raw project list, the query and the page position, and keeps
/// the derived filtered list and visible page consistent with all three.
///
/// The only suspending operation is [`load`](Self::load). For loads that
/// overlap, split it into [`begin_load`](Self::begin_load), a fetch on
/// [`store`](Self::store), and [`apply_load`](Self::apply_load): the newest
/// issued load that has been applied wins, older results are dropped.
pub struct FeedController {
    store: Arc<dyn ProjectStore>,
    cancel: CancelToken,
    raw: Vec<Project>,
    /// Indices into `raw`, in `raw` order.
    filtered: Vec<usize>,
    query: Query,
    page: PageState,
    sequencer: LoadSequencer,
    loaded_at: Option<DateTime<Utc>>,
}

impl FeedController {
    pub fn new(store: Arc<dyn ProjectStore>, page_size: usize, cancel: CancelToken) -> Self {
        Self {
            store,
            cancel,
            raw: Vec::new(),
            filtered: Vec::new(),
            query: Query::default(),
            page: PageState::new(page_size),
            sequencer: LoadSequencer::default(),
            loaded_at: None,
        }
    }

    pub fn store(&self) -> Arc<dyn ProjectStore> {
        Arc::clone(&self.store)
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Owner mounted: fetch the initial list.
    pub async fn on_mount(&mut self) -> Result<LoadOutcome, FetchError> {
        self.load().await
    }

    /// Query changed: rebuild the filtered list and go back to page 1.
    pub fn on_query_change(&mut self) {
        self.page.page_number = 1;
        self.recompute();
    }

    // ── Loading ──────────────────────────────────────────────────────

    /// Fetch the full collection and replace the raw list with it.
    ///
    /// On failure the raw list, query and page are left as they were.
    pub async fn load(&mut self) -> Result<LoadOutcome, FetchError> {
        let ticket = self.begin_load();
        let result = self.store.fetch_all().await;
        self.apply_load(ticket, result)
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        let ticket = self.sequencer.issue();
        tracing::debug!(seq = ticket.seq, "project load issued");
        ticket
    }

    /// Apply the result of the fetch issued as `ticket`.
    pub fn apply_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Project>, FetchError>,
    ) -> Result<LoadOutcome, FetchError> {
        if self.cancel.is_cancelled() {
            tracing::debug!(seq = ticket.seq, "owner torn down, dropping load result");
            return Ok(LoadOutcome::Cancelled { seq: ticket.seq });
        }

        // Superseded results are dropped whether they succeeded or failed.
        if let Err(newest_applied) = self.sequencer.admit(ticket) {
            tracing::debug!(
                seq = ticket.seq,
                newest_applied,
                failed = result.is_err(),
                "dropping stale project load"
            );
            return Ok(LoadOutcome::Stale {
                seq: ticket.seq,
                newest_applied,
            });
        }

        let projects = match result {
            Ok(projects) => projects,
            Err(e) => {
                tracing::warn!(seq = ticket.seq, error = %e, "project load failed");
                return Err(e);
            }
        };

        let count = projects.len();
        self.raw = projects;
        self.sequencer.commit(ticket);
        self.loaded_at = Some(Utc::now());
        self.page.page_number = 1;
        self.recompute();
        tracing::debug!(seq = ticket.seq, count, filtered = self.filtered.len(), "project load applied");
        Ok(LoadOutcome::Applied {
            seq: ticket.seq,
            count,
        })
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.query.search_text = text.into();
        self.on_query_change();
    }

    /// Changing the filter kind discards the current filter value, and
    /// [`FilterKind::All`] always leaves it empty.
    pub fn set_filter_kind(&mut self, kind: FilterKind) {
        if kind != self.query.filter_kind || kind == FilterKind::All {
            self.query.filter_value.clear();
        }
        self.query.filter_kind = kind;
        self.on_query_change();
    }

    pub fn set_filter_value(&mut self, value: impl Into<String>) {
        self.query.filter_value = value.into();
        self.on_query_change();
    }

    // ── Paging ───────────────────────────────────────────────────────

    /// Jump to page `n`, clamped into `1..=total_pages`. Returns the page landed on.
    pub fn go_to_page(&mut self, n: usize) -> usize {
        self.page.page_number = clamp_page(n, self.total_pages());
        self.page.page_number
    }

    pub fn next_page(&mut self) -> usize {
        self.go_to_page(self.page.page_number.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> usize {
        self.go_to_page(self.page.page_number.saturating_sub(1))
    }

    // ── Views ────────────────────────────────────────────────────────

    pub fn current_view(&self) -> PageView {
        let bounds = page_bounds(self.page.page_number, self.page.page_size, self.filtered.len());
        PageView {
            items: self.filtered[bounds]
                .iter()
                .map(|&i| self.raw[i].clone())
                .collect(),
            page_number: self.page.page_number,
            total_pages: self.total_pages(),
            total_items: self.filtered.len(),
        }
    }

    /// The filtered list in full, in raw-list order.
    pub fn filtered(&self) -> impl Iterator<Item = &Project> {
        self.filtered.iter().map(|&i| &self.raw[i])
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), self.page.page_size)
    }

    pub fn raw(&self) -> &[Project] {
        &self.raw
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn page_state(&self) -> PageState {
        self.page
    }

    /// When the raw list was last replaced. `None` before the first applied load.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    fn recompute(&mut self) {
        self.filtered = apply_filters(&self.raw, &self.query);
        self.page.page_number = clamp_page(self.page.page_number, self.total_pages());
    }
}
