use crate::columns::RACE_COLUMNS;
use crate::notify::{Notification, Notifier};
use crate::state::{Ticket, ViewFailure, ViewState};
use api_client::DataProvider;
use api_client::error::ApiError;
use core_types::{Page, Pagination, RACES, Race, RecordId};

/// The per-row control that opens the detail view for that row's record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowAction {
    pub id: RecordId,
}

/// One rendered table row: the six data cells plus the row's action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub cells: Vec<String>,
    pub action: ShowAction,
}

impl ListRow {
    fn from_race(race: &Race) -> Self {
        Self {
            cells: RACE_COLUMNS.iter().map(|column| column.value(race)).collect(),
            action: ShowAction { id: race.id.clone() },
        }
    }
}

/// The race collection view.
#[derive(Debug)]
pub struct ListView {
    pagination: Pagination,
    state: ViewState<Page<Race>>,
    generation: u64,
}

impl ListView {
    pub fn new(pagination: Pagination) -> Self {
        Self {
            pagination,
            state: ViewState::Idle,
            generation: 0,
        }
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn state(&self) -> &ViewState<Page<Race>> {
        &self.state
    }

    /// Fetches the current page and renders it.
    pub async fn mount<P: DataProvider>(&mut self, provider: &P, notifier: &dyn Notifier) {
        let ticket = self.begin();
        let result = provider.get_list::<Race>(RACES, &self.pagination).await;
        self.complete(ticket, result, notifier);
    }

    /// Starts a new mount: drops whatever was shown and enters `Loading`.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.state = ViewState::Loading;
        Ticket(self.generation)
    }

    /// Applies the result of the request started with `ticket`. Returns
    /// `false` if the request was superseded and its result discarded.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<Page<Race>, ApiError>,
        notifier: &dyn Notifier,
    ) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!(ticket = ticket.0, current = self.generation, "Discarding stale list result.");
            return false;
        }
        self.state = match result {
            Ok(page) => {
                tracing::debug!(rows = page.data.len(), total = page.total, "List view ready.");
                ViewState::Ready(page)
            }
            Err(error) => {
                tracing::warn!(error = %error, "List view failed to load.");
                notifier.open(Notification::error("Could not load races", error.to_string()));
                ViewState::Failed(ViewFailure::from(&error))
            }
        };
        true
    }

    /// Leaves the view. Any request still in flight is discarded on arrival.
    pub fn unmount(&mut self) {
        self.generation += 1;
        self.state = ViewState::Idle;
    }

    /// Rows to render, in response order. Empty unless the page loaded.
    pub fn rows(&self) -> Vec<ListRow> {
        self.state
            .data()
            .map(|page| page.data.iter().map(ListRow::from_race).collect())
            .unwrap_or_default()
    }

    /// The action of the `index`-th row (zero-based), if that row exists.
    pub fn action_at(&self, index: usize) -> Option<ShowAction> {
        let page = self.state.data()?;
        page.data.get(index).map(|race| ShowAction { id: race.id.clone() })
    }

    /// Total number of pages, once a page has loaded.
    pub fn page_count(&self) -> Option<u32> {
        self.state
            .data()
            .map(|page| self.pagination.page_count(page.total))
    }

    /// "Page 2 of 3 (23 records)", once a page has loaded.
    pub fn footer(&self) -> Option<String> {
        let page = self.state.data()?;
        Some(format!(
            "Page {} of {} ({} records)",
            self.pagination.current,
            self.pagination.page_count(page.total),
            page.total
        ))
    }

    /// Switches to another page window. The view is unmounted; the caller
    /// re-mounts.
    pub fn set_pagination(&mut self, pagination: Pagination) {
        self.unmount();
        self.pagination = pagination;
    }

    /// Moves to the next page if there is one. The view is unmounted; the
    /// caller re-mounts.
    pub fn next_page(&mut self) -> bool {
        match self.page_count() {
            Some(pages) if self.pagination.current < pages => {
                let next = self.pagination.with_page(self.pagination.current + 1);
                self.set_pagination(next);
                true
            }
            _ => false,
        }
    }

    /// Moves to the previous page if there is one. The view is unmounted;
    /// the caller re-mounts.
    pub fn previous_page(&mut self) -> bool {
        if self.pagination.current > 1 {
            let previous = self.pagination.with_page(self.pagination.current - 1);
            self.set_pagination(previous);
            true
        } else {
            false
        }
    }
}

impl Default for ListView {
    fn default() -> Self {
        Self::new(Pagination::default())
    }
}
