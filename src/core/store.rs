use chrono::{Datelike, Utc};
use hashbrown::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    actor::Actor,
    types::{HistoryAction, RecordId},
    vehicle::{Comment, HistoryEntry, VehicleFields, VehicleRecord, MAX_COMMENT_LEN},
};

/// Lower bound for accepted model years.
pub const MIN_YEAR: i32 = 1900;

/// Failure modes of store operations. All are recoverable; a failed
/// operation leaves the store untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The actor's role lacks the capability the operation requires.
    #[error("permission denied")]
    PermissionDenied,
    /// One or more field constraints failed. Carries every violation, not
    /// just the first.
    #[error("validation failed: {}", messages.join("; "))]
    Validation {
        /// Human-readable description of each violation.
        messages: Vec<String>,
    },
    /// No record with the given id exists.
    #[error("no record with id {0}")]
    NotFound(RecordId),
    /// Comment text exceeds [`MAX_COMMENT_LEN`] characters.
    #[error("comment of {len} characters exceeds the {MAX_COMMENT_LEN} character limit")]
    CommentTooLong {
        /// Length of the rejected comment.
        len: usize,
    },
    /// A loaded document violated registration uniqueness.
    #[error("duplicate registration {0:?} in persisted state")]
    CorruptState(String),
}

/// Authoritative in-memory collection of vehicle records.
///
/// Owns the records exclusively; callers receive clones. Single-threaded by
/// design: the registration uniqueness check is check-then-act and must move
/// into the same critical section as the insert if this store is ever shared
/// across threads.
#[derive(Debug, Default)]
pub struct FleetStore {
    records: HashMap<RecordId, VehicleRecord>,
    order: Vec<RecordId>,
    by_registration: HashMap<String, RecordId>,
    next_record_id: RecordId,
}

impl FleetStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            next_record_id: 1,
            ..Self::default()
        }
    }

    /// Rebuilds a store from a persisted record collection, preserving
    /// order. The next id resumes past the highest persisted id so ids are
    /// never reused.
    pub fn from_records(records: Vec<VehicleRecord>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for rec in records {
            if store.by_registration.contains_key(&rec.registration) {
                return Err(StoreError::CorruptState(rec.registration));
            }
            store.next_record_id = store.next_record_id.max(rec.id.saturating_add(1));
            store.by_registration.insert(rec.registration.clone(), rec.id);
            store.order.push(rec.id);
            store.records.insert(rec.id, rec);
        }
        Ok(store)
    }

    /// Exports the full collection in insertion order, the shape persisted
    /// by the session.
    pub fn records(&self) -> Vec<VehicleRecord> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id).cloned())
            .collect()
    }

    /// Creates a record owned by `actor`.
    ///
    /// Requires the edit capability. Validates the year range and
    /// registration uniqueness against the current contents, returning every
    /// violation at once; nothing is written on failure. The new record
    /// starts with no comments and a single `Created` history entry.
    pub fn create(
        &mut self,
        actor: &Actor,
        fields: VehicleFields,
    ) -> Result<VehicleRecord, StoreError> {
        if !actor.can_edit() {
            warn!(actor = %actor.name, "create denied");
            return Err(StoreError::PermissionDenied);
        }
        self.validate(&fields, None)?;

        let id = self.next_record_id;
        self.next_record_id += 1;

        let rec = VehicleRecord {
            id,
            brand: fields.brand,
            model: fields.model,
            year: fields.year,
            color: fields.color,
            registration: fields.registration,
            owner: actor.name.clone(),
            comments: Vec::new(),
            history: vec![HistoryEntry::now(HistoryAction::Created, &actor.name)],
        };

        self.by_registration.insert(rec.registration.clone(), id);
        self.order.push(id);
        self.records.insert(id, rec.clone());
        debug!(id, actor = %actor.name, "record created");
        Ok(rec)
    }

    /// Replaces the fields of an existing record.
    ///
    /// Requires the edit capability. Owner, comments, and prior history are
    /// preserved; exactly one `Updated` entry is appended. The registration
    /// uniqueness check excludes the record being updated, so keeping the
    /// same registration is always valid.
    pub fn update(
        &mut self,
        actor: &Actor,
        id: RecordId,
        fields: VehicleFields,
    ) -> Result<VehicleRecord, StoreError> {
        if !actor.can_edit() {
            warn!(actor = %actor.name, id, "update denied");
            return Err(StoreError::PermissionDenied);
        }
        let old = self.records.get(&id).ok_or(StoreError::NotFound(id))?;
        self.validate(&fields, Some(id))?;

        // History is treated as an immutable log: build a fresh record value
        // rather than mutating the stored one in place.
        let mut history = old.history.clone();
        history.push(HistoryEntry::now(HistoryAction::Updated, &actor.name));
        let updated = VehicleRecord {
            id,
            brand: fields.brand,
            model: fields.model,
            year: fields.year,
            color: fields.color,
            registration: fields.registration,
            owner: old.owner.clone(),
            comments: old.comments.clone(),
            history,
        };

        let old_registration = old.registration.clone();
        if updated.registration != old_registration {
            self.by_registration.remove(&old_registration);
            self.by_registration
                .insert(updated.registration.clone(), id);
        }
        self.records.insert(id, updated.clone());
        debug!(id, actor = %actor.name, "record updated");
        Ok(updated)
    }

    /// Permanently removes a record. Requires the delete capability.
    /// Irreversible; there is no tombstone and the id is never reused.
    pub fn delete(&mut self, actor: &Actor, id: RecordId) -> Result<VehicleRecord, StoreError> {
        if !actor.can_delete() {
            warn!(actor = %actor.name, id, "delete denied");
            return Err(StoreError::PermissionDenied);
        }
        let rec = self.records.remove(&id).ok_or(StoreError::NotFound(id))?;
        self.by_registration.remove(&rec.registration);
        if let Some(pos) = self.order.iter().position(|x| *x == id) {
            self.order.remove(pos);
        }
        debug!(id, actor = %actor.name, "record deleted");
        Ok(rec)
    }

    /// Appends a comment and its `CommentAdded` history entry as one atomic
    /// update. Requires the comment capability; rejects text longer than
    /// [`MAX_COMMENT_LEN`] characters.
    pub fn comment(
        &mut self,
        actor: &Actor,
        id: RecordId,
        text: impl Into<String>,
    ) -> Result<VehicleRecord, StoreError> {
        if !actor.can_add_comments() {
            warn!(actor = %actor.name, id, "comment denied");
            return Err(StoreError::PermissionDenied);
        }
        let text = text.into();
        let len = text.chars().count();
        if len > MAX_COMMENT_LEN {
            return Err(StoreError::CommentTooLong { len });
        }
        let old = self.records.get(&id).ok_or(StoreError::NotFound(id))?;

        let mut updated = old.clone();
        updated.comments.push(Comment {
            text,
            author: actor.name.clone(),
            at: Utc::now(),
        });
        updated
            .history
            .push(HistoryEntry::now(HistoryAction::CommentAdded, &actor.name));
        self.records.insert(id, updated.clone());
        debug!(id, actor = %actor.name, "comment added");
        Ok(updated)
    }

    /// Borrows a record by id.
    pub fn get(&self, id: RecordId) -> Option<&VehicleRecord> {
        self.records.get(&id)
    }

    /// Clones a record by id.
    pub fn get_cloned(&self, id: RecordId) -> Option<VehicleRecord> {
        self.get(id).cloned()
    }

    /// Record ids in insertion order.
    pub fn ordered_ids(&self) -> &[RecordId] {
        &self.order
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Checks year range and registration uniqueness, collecting every
    /// violation. `exclude` names the record whose own registration must not
    /// count as a collision (the update path).
    fn validate(
        &self,
        fields: &VehicleFields,
        exclude: Option<RecordId>,
    ) -> Result<(), StoreError> {
        let max_year = Utc::now().year() + 1;
        let mut messages = Vec::new();

        if fields.year < MIN_YEAR || fields.year > max_year {
            messages.push(format!("year must be between {MIN_YEAR} and {max_year}"));
        }
        let taken = self
            .by_registration
            .get(&fields.registration)
            .is_some_and(|holder| Some(*holder) != exclude);
        if taken {
            messages.push(format!(
                "registration number {:?} already exists",
                fields.registration
            ));
        }

        if messages.is_empty() {
            Ok(())
        } else {
            Err(StoreError::Validation { messages })
        }
    }
}
