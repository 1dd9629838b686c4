use thiserror::Error;
use tracing::warn;

use crate::{
    actor::Actor,
    core::store::{FleetStore, StoreError},
    persist::{PersistError, StateSink},
    query::{self, RecordFilter},
    types::RecordId,
    vehicle::{VehicleFields, VehicleRecord},
};

use super::view::{Tab, ViewState};

/// Failure surfaced to the view for a rejected or failed intent.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The store rejected the mutation.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The mutation applied in memory but the sink write or the startup
    /// read failed.
    #[error(transparent)]
    Persist(#[from] PersistError),
    /// `select_actor` named someone outside the roster.
    #[error("unknown actor {0:?}")]
    UnknownActor(String),
    /// The session was constructed with an empty roster.
    #[error("roster must not be empty")]
    EmptyRoster,
}

/// One logical user session: the authoritative store, the persistence sink,
/// the fixed roster, and the view controls (active actor, filter, page,
/// tab).
///
/// Single-threaded and synchronous; one intent completes before the next
/// begins. Every successful mutation rewrites the persisted document
/// wholesale before returning.
pub struct Session<S: StateSink> {
    store: FleetStore,
    sink: S,
    roster: Vec<Actor>,
    current: usize,
    filter: RecordFilter,
    page: usize,
    tab: Tab,
}

impl<S: StateSink> Session<S> {
    /// Restores the record collection from `sink` and starts a session with
    /// the first roster actor active. An absent document means an empty
    /// store.
    pub fn new(sink: S, roster: Vec<Actor>) -> Result<Self, SessionError> {
        if roster.is_empty() {
            return Err(SessionError::EmptyRoster);
        }
        let store = match sink.load_state()? {
            Some(payload) => {
                let records: Vec<VehicleRecord> = serde_json::from_str(&payload)
                    .map_err(PersistError::from)?;
                FleetStore::from_records(records)?
            }
            None => FleetStore::new(),
        };
        Ok(Self {
            store,
            sink,
            roster,
            current: 0,
            filter: RecordFilter::default(),
            page: 1,
            tab: Tab::default(),
        })
    }

    /// The active actor.
    pub fn actor(&self) -> &Actor {
        &self.roster[self.current]
    }

    /// Read-only access to the store.
    pub fn store(&self) -> &FleetStore {
        &self.store
    }

    /// Read-only access to the persistence sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Switches the active actor. Filter, page, and tab are kept; the next
    /// rendered slice reflects the new actor's visibility.
    pub fn select_actor(&mut self, name: &str) -> Result<(), SessionError> {
        match self.roster.iter().position(|a| a.name == name) {
            Some(idx) => {
                self.current = idx;
                Ok(())
            }
            None => Err(SessionError::UnknownActor(name.to_string())),
        }
    }

    /// Creates a record owned by the active actor and persists.
    pub fn create_record(
        &mut self,
        fields: VehicleFields,
    ) -> Result<VehicleRecord, SessionError> {
        let actor = self.roster[self.current].clone();
        let rec = self.store.create(&actor, fields)?;
        self.persist()?;
        Ok(rec)
    }

    /// Replaces a record's fields and persists.
    pub fn edit_record(
        &mut self,
        id: RecordId,
        fields: VehicleFields,
    ) -> Result<VehicleRecord, SessionError> {
        let actor = self.roster[self.current].clone();
        let rec = self.store.update(&actor, id, fields)?;
        self.persist()?;
        Ok(rec)
    }

    /// Permanently deletes a record and persists.
    pub fn delete_record(&mut self, id: RecordId) -> Result<(), SessionError> {
        let actor = self.roster[self.current].clone();
        self.store.delete(&actor, id)?;
        self.persist()?;
        Ok(())
    }

    /// Appends a comment to a record and persists.
    pub fn add_comment(
        &mut self,
        id: RecordId,
        text: impl Into<String>,
    ) -> Result<VehicleRecord, SessionError> {
        let actor = self.roster[self.current].clone();
        let rec = self.store.comment(&actor, id, text)?;
        self.persist()?;
        Ok(rec)
    }

    /// Sets the search term and owner filter. The page is left where it is;
    /// the rendered slice clamps it if the visible set shrank.
    pub fn set_filter(&mut self, search: impl Into<String>, owner: impl Into<String>) {
        self.filter = RecordFilter {
            search: search.into(),
            owner: owner.into(),
        };
    }

    /// Moves to page `n`. Out-of-range requests are ignored.
    pub fn set_page(&mut self, n: usize) {
        let records = self.store.records();
        let visible = query::visible_records(self.actor(), &records, &self.filter);
        if n >= 1 && n <= query::total_pages(visible.len()) {
            self.page = n;
        }
    }

    /// Selects the active tab.
    pub fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Computes the state the view renders from: active actor, capabilities,
    /// the visible slice for the current filter and page, tab, and roster.
    pub fn view_state(&self) -> ViewState {
        let actor = self.actor().clone();
        let slice = query::visible_slice(&actor, &self.store.records(), &self.filter, self.page);
        ViewState {
            capabilities: actor.capabilities(),
            actor,
            slice,
            tab: self.tab,
            roster: self.roster.clone(),
        }
    }

    fn persist(&mut self) -> Result<(), SessionError> {
        let payload =
            serde_json::to_string(&self.store.records()).map_err(PersistError::from)?;
        if let Err(err) = self.sink.save_state(&payload) {
            warn!(error = %err, "state write failed");
            return Err(err.into());
        }
        Ok(())
    }
}
