//! Single-actor session driving the store, query engine, and persistence.

/// Session driver and intent handling.
pub mod driver;
/// Renderable view state handed to the external view layer.
pub mod view;

pub use driver::{Session, SessionError};
pub use view::{Tab, ViewState};
