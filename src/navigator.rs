use crate::routes::Route;
use api_client::DataProvider;
use core_types::{Pagination, RecordId};
use std::sync::Arc;
use views::render::{render_detail, render_list};
use views::{DetailView, ListView, Notifier};

/// Shown for any route no resource claims.
pub const NOT_FOUND_PAGE: &str = "404\nSorry, the page you visited does not exist.\n";

/// Moves between the list and detail views and keeps the history for back
/// navigation.
///
/// Exactly one view is mounted at a time. Navigating away unmounts the view
/// that was showing, which drops its data.
pub struct Navigator<P: DataProvider> {
    provider: P,
    notifier: Arc<dyn Notifier>,
    list: ListView,
    detail: DetailView,
    current: Option<Route>,
    history: Vec<Route>,
}

impl<P: DataProvider> Navigator<P> {
    pub fn new(provider: P, notifier: Arc<dyn Notifier>, pagination: Pagination) -> Self {
        Self {
            provider,
            notifier,
            list: ListView::new(pagination),
            detail: DetailView::new(),
            current: None,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> Option<&Route> {
        self.current.as_ref()
    }

    pub fn list(&self) -> &ListView {
        &self.list
    }

    pub fn detail(&self) -> &DetailView {
        &self.detail
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Replaces the list's page. Takes effect the next time the list mounts.
    pub fn set_pagination(&mut self, pagination: Pagination) {
        self.list.set_pagination(pagination);
    }

    /// Goes to `route`, remembering where we came from.
    pub async fn navigate(&mut self, route: Route) {
        if let Some(previous) = self.current.take() {
            self.history.push(previous);
        }
        tracing::info!(route = %route, "Navigating.");
        self.current = Some(route);
        self.mount_current().await;
    }

    /// Follows the "view" control of the `index`-th row (zero-based) of the
    /// list. Returns `false` when not on the list or the row does not exist.
    pub async fn open_row(&mut self, index: usize) -> bool {
        if self.current != Some(Route::Listing) {
            return false;
        }
        match self.list.action_at(index) {
            Some(action) => {
                self.navigate(Route::Viewing(action.id)).await;
                true
            }
            None => false,
        }
    }

    pub async fn open(&mut self, id: RecordId) {
        self.navigate(Route::Viewing(id)).await;
    }

    /// Returns to the previous route. `false` if there is nowhere to go back to.
    pub async fn back(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };
        tracing::info!(route = %previous, "Navigating back.");
        self.current = Some(previous);
        self.mount_current().await;
        true
    }

    /// Re-mounts the current route, fetching its data again.
    pub async fn refresh(&mut self) {
        self.mount_current().await;
    }

    pub async fn next_page(&mut self) -> bool {
        if self.current != Some(Route::Listing) || !self.list.next_page() {
            return false;
        }
        self.mount_current().await;
        true
    }

    pub async fn previous_page(&mut self) -> bool {
        if self.current != Some(Route::Listing) || !self.list.previous_page() {
            return false;
        }
        self.mount_current().await;
        true
    }

    async fn mount_current(&mut self) {
        match &self.current {
            Some(Route::Listing) => {
                self.detail.unmount();
                self.list.mount(&self.provider, self.notifier.as_ref()).await;
            }
            Some(Route::Viewing(id)) => {
                let id = id.clone();
                self.list.unmount();
                self.detail.mount(id, &self.provider, self.notifier.as_ref()).await;
            }
            Some(Route::NotFound(path)) => {
                tracing::warn!(path = %path, "No route matches.");
                self.list.unmount();
                self.detail.unmount();
            }
            None => {}
        }
    }

    /// The text of whatever is showing.
    pub fn render(&self) -> String {
        match &self.current {
            Some(Route::Listing) => render_list(&self.list),
            Some(Route::Viewing(_)) => render_detail(&self.detail),
            Some(Route::NotFound(_)) => NOT_FOUND_PAGE.to_string(),
            None => String::new(),
        }
    }

    /// Whether the showing view ended in a failed fetch (or a dead route).
    pub fn has_failed(&self) -> bool {
        match &self.current {
            Some(Route::Listing) => self.list.state().failure().is_some(),
            Some(Route::Viewing(_)) => self.detail.state().failure().is_some(),
            Some(Route::NotFound(_)) => true,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_client::testing::{StubProvider, race};
    use views::MemoryNotifier;

    fn navigator(provider: Arc<StubProvider>) -> (Navigator<Arc<StubProvider>>, Arc<MemoryNotifier>) {
        let notifier = Arc::new(MemoryNotifier::new());
        let nav = Navigator::new(provider, notifier.clone(), Pagination::default());
        (nav, notifier)
    }

    fn elf_and_dwarf() -> Arc<StubProvider> {
        Arc::new(StubProvider::with(vec![
            race("r1", "Elf", "Forest dweller", [3, 8, 7, 5]),
            race("r2", "Dwarf", "Mountain folk", [7, 3, 4, 6]),
        ]))
    }

    #[tokio::test]
    async fn row_action_opens_the_detail_for_that_row() {
        let provider = elf_and_dwarf();
        let (mut nav, _) = navigator(provider.clone());

        nav.navigate(Route::Listing).await;
        assert!(nav.open_row(1).await);

        assert_eq!(nav.current(), Some(&Route::Viewing(RecordId::from("r2"))));
        assert_eq!(*provider.get_calls.lock().unwrap(), vec![RecordId::from("r2")]);
        assert!(nav.render().contains("Mountain folk"));
        // The list was unmounted on the way out.
        assert!(nav.list().rows().is_empty());
    }

    #[tokio::test]
    async fn back_returns_to_the_list_and_refetches() {
        let provider = elf_and_dwarf();
        let (mut nav, _) = navigator(provider.clone());

        nav.navigate(Route::Listing).await;
        nav.open_row(0).await;
        assert!(nav.back().await);

        assert_eq!(nav.current(), Some(&Route::Listing));
        assert_eq!(nav.list().rows().len(), 2);
        assert_eq!(provider.list_calls.lock().unwrap().len(), 2);
        assert!(nav.detail().sections().is_empty());
        assert!(!nav.back().await);
    }

    #[tokio::test]
    async fn open_row_only_works_from_the_list() {
        let (mut nav, _) = navigator(elf_and_dwarf());

        assert!(!nav.open_row(0).await);
        nav.navigate(Route::Listing).await;
        assert!(!nav.open_row(5).await);
        nav.open(RecordId::from("r1")).await;
        assert!(!nav.open_row(0).await);
    }

    #[tokio::test]
    async fn missing_record_shows_no_sections_and_notifies() {
        let (mut nav, notifier) = navigator(elf_and_dwarf());

        nav.open(RecordId::from("r1")).await;
        nav.open(RecordId::from("r404")).await;

        assert!(nav.has_failed());
        assert_eq!(nav.render(), "Show Race\n");
        assert_eq!(notifier.notifications().len(), 1);
    }

    #[tokio::test]
    async fn unknown_route_renders_the_catch_all_page() {
        let (mut nav, _) = navigator(elf_and_dwarf());

        nav.navigate(Route::parse("/classes")).await;

        assert!(nav.has_failed());
        assert_eq!(nav.render(), NOT_FOUND_PAGE);
    }
}
