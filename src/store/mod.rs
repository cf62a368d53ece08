//! JSON snapshot persistence.
//!
//! Incidents and resources are stored as two JSON arrays. Incidents refer
//! to held resources by id; restoring a snapshot rebuilds the engine with
//! exactly the persisted statuses and assignments, without running an
//! allocation pass.

mod config;
mod error;
mod records;
mod snapshot;

pub use config::StoreConfig;
pub use error::StoreError;
pub use records::{IncidentRecord, ResourceRecord};
pub use snapshot::{Snapshot, SnapshotStore};
