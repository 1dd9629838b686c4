//! Vehicle domain record, draft fields, comments, and audit history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{HistoryAction, RecordId};

/// Maximum accepted comment length in characters.
pub const MAX_COMMENT_LEN: usize = 500;

/// An immutable annotation on a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment body, at most [`MAX_COMMENT_LEN`] characters.
    pub text: String,
    /// Name of the actor who wrote the comment.
    pub author: String,
    /// Creation time.
    pub at: DateTime<Utc>,
}

/// One entry in a record's append-only audit history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// What happened.
    pub action: HistoryAction,
    /// Name of the actor who performed the action.
    pub author: String,
    /// When it happened.
    pub at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Builds an entry stamped with the current time.
    pub fn now(action: HistoryAction, author: impl Into<String>) -> Self {
        Self {
            action,
            author: author.into(),
            at: Utc::now(),
        }
    }
}

/// Fully materialized, authoritative vehicle record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    /// Stable record identifier.
    pub id: RecordId,
    /// Manufacturer name.
    pub brand: String,
    /// Model name.
    pub model: String,
    /// Model year, within `[1900, current year + 1]`.
    pub year: i32,
    /// Body color.
    pub color: String,
    /// Registration number, unique among live records.
    pub registration: String,
    /// Name of the actor responsible for the record.
    pub owner: String,
    /// Annotations, in insertion order.
    pub comments: Vec<Comment>,
    /// Append-only audit log. Every structural mutation appends exactly one
    /// entry; entries are never rewritten or reordered.
    pub history: Vec<HistoryEntry>,
}

impl VehicleRecord {
    /// True when `needle` occurs, case-insensitively, in any textual field.
    pub fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        [
            self.brand.as_str(),
            self.model.as_str(),
            self.color.as_str(),
            self.registration.as_str(),
            self.owner.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
            || self.year.to_string().contains(&needle)
    }
}

/// Caller-supplied fields used to create or replace a [`VehicleRecord`].
///
/// Identity, ownership, comments, and history are managed by the store and
/// are deliberately absent here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleFields {
    /// Manufacturer name.
    pub brand: String,
    /// Model name.
    pub model: String,
    /// Model year.
    pub year: i32,
    /// Body color.
    pub color: String,
    /// Registration number.
    pub registration: String,
}
