use crate::notify::{Notification, Notifier};
use crate::state::{Ticket, ViewFailure, ViewState};
use api_client::DataProvider;
use api_client::error::ApiError;
use core_types::{RACES, Race, RecordId};

/// How a section's value is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Treatment {
    Plain,
    Tag,
}

/// A labeled block of the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub label: &'static str,
    pub value: String,
    pub treatment: Treatment,
}

/// The single-race view.
///
/// Only the name and description are shown. `base_attributes` arrives with
/// the record but is not part of this view.
#[derive(Debug, Default)]
pub struct DetailView {
    id: Option<RecordId>,
    state: ViewState<Race>,
    generation: u64,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id from the route this view was last mounted with.
    pub fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    pub fn state(&self) -> &ViewState<Race> {
        &self.state
    }

    /// Fetches the record with `id` and renders it.
    pub async fn mount<P: DataProvider>(
        &mut self,
        id: RecordId,
        provider: &P,
        notifier: &dyn Notifier,
    ) {
        let ticket = self.begin(id.clone());
        let result = provider.get_one::<Race>(RACES, &id).await;
        self.complete(ticket, result, notifier);
    }

    /// Starts a new mount for `id`. The previous record is dropped here, so
    /// nothing of it can show while the new one loads or after it fails.
    pub fn begin(&mut self, id: RecordId) -> Ticket {
        self.generation += 1;
        self.id = Some(id);
        self.state = ViewState::Loading;
        Ticket(self.generation)
    }

    /// Applies the result of the request started with `ticket`. Returns
    /// `false` if the request was superseded and its result discarded.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<Race, ApiError>,
        notifier: &dyn Notifier,
    ) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!(ticket = ticket.0, current = self.generation, "Discarding stale record.");
            return false;
        }
        self.state = match result {
            Ok(race) => ViewState::Ready(race),
            Err(error) => {
                tracing::warn!(error = %error, id = ?self.id, "Detail view failed to load.");
                notifier.open(Notification::error("Could not load race", error.to_string()));
                ViewState::Failed(ViewFailure::from(&error))
            }
        };
        true
    }

    pub fn unmount(&mut self) {
        self.generation += 1;
        self.id = None;
        self.state = ViewState::Idle;
    }

    /// The sections to render; empty unless the record loaded.
    pub fn sections(&self) -> Vec<Section> {
        let Some(race) = self.state.data() else {
            return Vec::new();
        };
        vec![
            Section {
                label: "Name",
                value: race.name.clone(),
                treatment: Treatment::Plain,
            },
            Section {
                label: "Description",
                value: race.description.clone(),
                treatment: Treatment::Tag,
            },
        ]
    }
}
