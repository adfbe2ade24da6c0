use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use parking_lot::Mutex;
use shared::models::ReservationRecord;
use shared::request::{ReservationListQuery, SortBy};

use super::ConsoleError;
use super::state::{FilterField, PageDirection, QueryState};
use crate::error::ClientResult;
use crate::export::CsvExport;
use crate::source::{ListingResult, ReservationSource};

/// What the admin table currently shows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsoleView {
    pub records: Vec<ReservationRecord>,
    pub total: u64,
    /// A refresh is in flight
    pub loading: bool,
    /// Inline error for the table; rows from the last good load stay visible
    pub error: Option<String>,
    /// Alert-level notice (export failures)
    pub notice: Option<String>,
    /// At least one refresh succeeded
    pub loaded: bool,
}

/// How a refresh ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied,
    Failed,
    /// A newer refresh was issued while this one was in flight; its result was dropped
    Superseded,
}

struct ConsoleState {
    query: QueryState,
    view: ConsoleView,
    /// Generation of the most recently issued refresh
    latest: u64,
}

struct Inner {
    source: Arc<dyn ReservationSource>,
    token: String,
    state: Mutex<ConsoleState>,
}

/// Reservation query console
///
/// Holds the view-state and the last displayed page. Cloning gives another
/// handle to the same console.
///
/// Each [`refresh`](Self::refresh) takes a generation number when it is
/// called, and its result is applied only if no later refresh was issued in
/// the meantime. Results are therefore applied in issue order regardless of
/// the order in which responses arrive.
#[derive(Clone)]
pub struct ReservationConsole {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for ReservationConsole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("ReservationConsole")
            .field("query", &state.query)
            .field("latest", &state.latest)
            .finish_non_exhaustive()
    }
}

impl ReservationConsole {
    pub fn new(source: Arc<dyn ReservationSource>, token: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Inner {
                source,
                token: token.into(),
                state: Mutex::new(ConsoleState {
                    query: QueryState::default(),
                    view: ConsoleView::default(),
                    latest: 0,
                }),
            }),
        }
    }

    pub fn query(&self) -> QueryState {
        self.inner.state.lock().query.clone()
    }

    pub fn view(&self) -> ConsoleView {
        self.inner.state.lock().view.clone()
    }

    pub fn total_pages(&self) -> u32 {
        let state = self.inner.state.lock();
        state.query.total_pages(state.view.total)
    }

    pub fn has_prev(&self) -> bool {
        let state = self.inner.state.lock();
        state.query.has_prev(state.view.total)
    }

    pub fn has_next(&self) -> bool {
        let state = self.inner.state.lock();
        state.query.has_next(state.view.total)
    }

    // ========== View-state changes (no fetch) ==========

    pub fn set_filter(&self, field: FilterField, value: impl Into<String>) -> bool {
        self.inner.state.lock().query.set_filter(field, value)
    }

    pub fn toggle_sort(&self, field: SortBy) {
        self.inner.state.lock().query.toggle_sort(field);
    }

    pub fn set_per_page(&self, per_page: u32) -> Result<bool, ConsoleError> {
        self.inner.state.lock().query.set_per_page(per_page)
    }

    pub fn paginate(&self, direction: PageDirection) -> bool {
        let mut state = self.inner.state.lock();
        let total = state.view.total;
        state.query.paginate(direction, total)
    }

    pub fn dismiss_notice(&self) {
        self.inner.state.lock().view.notice = None;
    }

    // ========== Fetching ==========

    /// Fetch the page described by the current view-state
    ///
    /// The request is built and its generation taken before this returns, so
    /// the returned future can be polled later or spawned without changing
    /// which state it belongs to.
    pub fn refresh(&self) -> BoxFuture<'static, RefreshOutcome> {
        let inner = Arc::clone(&self.inner);
        let (generation, request) = {
            let mut state = inner.state.lock();
            state.latest += 1;
            state.view.loading = true;
            (state.latest, state.query.to_request(&inner.token))
        };

        async move {
            let result = inner.source.list_reservations(&request).await;

            let mut state = inner.state.lock();
            if state.latest != generation {
                tracing::debug!(generation, latest = state.latest, "Dropping superseded listing response");
                return RefreshOutcome::Superseded;
            }
            state.view.loading = false;

            match result {
                Ok(ListingResult {
                    reservations,
                    total,
                    page,
                }) => {
                    state.view.records = reservations;
                    state.view.total = total;
                    state.view.error = None;
                    state.view.loaded = true;
                    state.query.page = page.max(1);
                    RefreshOutcome::Applied
                }
                Err(e) => {
                    tracing::warn!(error = %e, page = request.page, "Reservation listing failed");
                    state.view.error = Some(e.to_string());
                    RefreshOutcome::Failed
                }
            }
        }
        .boxed()
    }

    /// Fetch every matching record and render it as CSV
    ///
    /// On failure an alert notice is set and no export is produced.
    pub async fn export_csv(&self) -> Result<CsvExport, ConsoleError> {
        let request = {
            let state = self.inner.state.lock();
            state
                .query
                .to_export_request(&self.inner.token, state.view.total)
        };

        let today = chrono::Local::now().date_naive();
        let export = match self.fetch_all(request).await {
            Ok(records) => CsvExport::new(&records, today).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        match export {
            Ok(export) => {
                tracing::info!(rows = export.rows, file = %export.filename, "Reservations exported");
                Ok(export)
            }
            Err(message) => {
                tracing::warn!(error = %message, "Reservation export failed");
                let error = ConsoleError::ExportFailed(message);
                self.inner.state.lock().view.notice = Some(error.to_string());
                Err(error)
            }
        }
    }

    /// Every record matching `request`
    ///
    /// The displayed total may be stale, so page 1 is asked for again with a
    /// larger page size when the server reports more matches. Pages that the
    /// server's page-size cap pushes further out are then fetched in turn.
    async fn fetch_all(&self, mut request: ReservationListQuery) -> ClientResult<Vec<ReservationRecord>> {
        let source = &self.inner.source;
        let mut result = source.list_reservations(&request).await?;
        if result.total > u64::from(request.per_page) {
            request.per_page = QueryState::export_page_size(result.total);
            result = source.list_reservations(&request).await?;
        }

        let total = result.total;
        let mut records = result.reservations;
        while (records.len() as u64) < total {
            request.page += 1;
            let next = source.list_reservations(&request).await?;
            if next.reservations.is_empty() {
                tracing::warn!(total, fetched = records.len(), "Listing shrank during export");
                break;
            }
            records.extend(next.reservations);
        }
        Ok(records)
    }
}
