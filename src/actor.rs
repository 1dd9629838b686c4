//! Actors, the role capability table, and the fixed roster.

use serde::{Deserialize, Serialize};

use crate::types::Role;

/// Boolean permissions derived from a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// May create and update records.
    pub can_edit: bool,
    /// May hard-delete records.
    pub can_delete: bool,
    /// May append comments to records.
    pub can_add_comments: bool,
}

impl Role {
    /// Capability table for the closed role set. Pure and total.
    pub fn capabilities(self) -> Capabilities {
        match self {
            Role::Admin => Capabilities {
                can_edit: true,
                can_delete: true,
                can_add_comments: true,
            },
            Role::Operator => Capabilities {
                can_edit: true,
                can_delete: false,
                can_add_comments: true,
            },
            Role::Consultant => Capabilities {
                can_edit: false,
                can_delete: false,
                can_add_comments: false,
            },
        }
    }
}

/// A named user with one role, selected from the fixed roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Name, unique within the roster. Recorded as record owner and as the
    /// author of comments and history entries.
    pub name: String,
    /// The actor's role.
    pub role: Role,
}

impl Actor {
    /// Constructs an actor.
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    /// Full capability set for this actor's role.
    pub fn capabilities(&self) -> Capabilities {
        self.role.capabilities()
    }

    /// True when this actor may create and update records.
    pub fn can_edit(&self) -> bool {
        self.capabilities().can_edit
    }

    /// True when this actor may delete records.
    pub fn can_delete(&self) -> bool {
        self.capabilities().can_delete
    }

    /// True when this actor may append comments.
    pub fn can_add_comments(&self) -> bool {
        self.capabilities().can_add_comments
    }
}

/// The fixed three-actor roster, one per role. Constant process state; never
/// persisted or mutated at runtime.
pub fn default_roster() -> Vec<Actor> {
    vec![
        Actor::new("Felipe", Role::Admin),
        Actor::new("Tiago", Role::Operator),
        Actor::new("Pedro", Role::Consultant),
    ]
}
