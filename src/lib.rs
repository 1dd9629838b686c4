//! Permission-aware vehicle record manager with an append-only audit trail.
//!
//! # Examples
//!
//! Direct store usage with [`core::store::FleetStore`]:
//! ```
//! use fleetlog::{
//!     actor::Actor,
//!     core::store::FleetStore,
//!     types::Role,
//!     vehicle::VehicleFields,
//! };
//!
//! let admin = Actor::new("Felipe", Role::Admin);
//! let mut store = FleetStore::new();
//! let rec = store.create(&admin, VehicleFields {
//!     brand: "Fiat".to_string(),
//!     model: "Uno".to_string(),
//!     year: 2020,
//!     color: "red".to_string(),
//!     registration: "ABC-1234".to_string(),
//! }).expect("create");
//! assert_eq!(rec.id, 1);
//! assert_eq!(rec.owner, "Felipe");
//! assert_eq!(rec.history.len(), 1);
//! ```
//!
//! Full session with a persistence sink:
//! ```
//! use fleetlog::{
//!     actor::default_roster,
//!     persist::memory::MemoryStateSink,
//!     session::Session,
//!     vehicle::VehicleFields,
//! };
//!
//! let mut session = Session::new(MemoryStateSink::new(), default_roster())
//!     .expect("session");
//! session.create_record(VehicleFields {
//!     brand: "Fiat".to_string(),
//!     model: "Uno".to_string(),
//!     year: 2020,
//!     color: "red".to_string(),
//!     registration: "ABC-1234".to_string(),
//! }).expect("create");
//! let state = session.view_state();
//! assert_eq!(state.slice.items.len(), 1);
//! assert_eq!(state.slice.total_pages, 1);
//! ```
#![deny(missing_docs)]

/// Actors, capabilities, and the fixed roster.
pub mod actor;
/// Authoritative in-memory store.
pub mod core;
/// Persistence abstraction, SQLite and in-memory sinks.
pub mod persist;
/// Visibility gating, search, filter, and pagination.
pub mod query;
/// Session driver mapping view intents onto the store and query engine.
pub mod session;
/// Shared primitive types and enums.
pub mod types;
/// Vehicle domain records, comments, and history.
pub mod vehicle;
