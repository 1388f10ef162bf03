//! Store Module
//!
//! The in-memory record store and its data model.
//!
//! ## Responsibilities
//! - Hold the ordered collection of equipment records
//! - Validate candidate records before admission
//! - Serialize every read and write through one exclusive lock
//! - Mirror the collection to disk after each successful mutation
//!
//! ## Data Structure Choice
//! A plain `Vec<Record>` wrapped in a Mutex:
//! - Insertion order preserved (the persisted file keeps registration order)
//! - Linear scan for lookup and uniqueness, acceptable at inventory scale
//! - A map keyed by normalized code would speed lookups but is not needed yet

mod record;
mod inventory;

pub use record::{Record, RecordDraft, Status, TIMESTAMP_FORMAT};
pub use inventory::InventoryStore;
