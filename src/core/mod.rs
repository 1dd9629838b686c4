//! In-memory authoritative store.

/// Permission-checked fleet store and validation.
pub mod store;
