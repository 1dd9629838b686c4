//! Shared primitive IDs and closed role/action enums.

use serde::{Deserialize, Serialize};

/// Monotonic vehicle record identifier. Never reused, even after deletion.
pub type RecordId = u64;

/// Closed set of roles an actor can hold.
///
/// Capabilities are derived from the role via [`Role::capabilities`]; there
/// is deliberately no way to represent a role outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access: edit, delete, comment, sees every record.
    Admin,
    /// Edits and comments on own records only.
    Operator,
    /// View-only role with no mutation capabilities.
    Consultant,
}

impl Role {
    /// Display label used by the view layer.
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Operator => "operator",
            Role::Consultant => "consultant",
        }
    }
}

/// Action recorded in a record's audit history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryAction {
    /// Record was created.
    Created,
    /// Record fields were replaced.
    Updated,
    /// A comment was appended.
    CommentAdded,
}
