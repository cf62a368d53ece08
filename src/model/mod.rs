//! Incident and resource records.
//!
//! Both entity kinds are created once (through [`crate::intake`] or a
//! restored snapshot) and afterwards only mutated by the allocation
//! engine. Incidents refer to the resources they hold by [`ResourceId`];
//! they never own them.

mod incident;
mod resource;
mod types;

pub use incident::Incident;
pub use resource::Resource;
pub use types::{IncidentId, IncidentStatus, Priority, RequiredResource, ResourceId, ResourceKind};
