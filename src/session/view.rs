//! Data pushed to the external view layer for rendering.

use crate::{
    actor::{Actor, Capabilities},
    query::VisibleSlice,
};

/// Top-level tab selected in the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Record list and registration form.
    #[default]
    Vehicles,
    /// Roster and per-role capability overview.
    Team,
}

/// Everything the view needs to render one frame: the active actor, what
/// that actor may do, the visible record slice, and the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// The active actor.
    pub actor: Actor,
    /// Capabilities of the active actor, for enabling and disabling
    /// controls.
    pub capabilities: Capabilities,
    /// The paginated record slice visible to the active actor.
    pub slice: VisibleSlice,
    /// Currently selected tab.
    pub tab: Tab,
    /// The full fixed roster, for the actor selector and team tab.
    pub roster: Vec<Actor>,
}
