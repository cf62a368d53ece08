//! Resource record.

use super::types::{IncidentId, ResourceId, ResourceKind};

/// A response unit in the shared pool.
///
/// Availability is derived from the assignment, so a resource is
/// available exactly when it is assigned to no incident.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    id: ResourceId,
    kind: ResourceKind,
    location: String,
    assigned_to: Option<IncidentId>,
}

impl Resource {
    /// Creates an available resource.
    pub fn new(id: ResourceId, kind: ResourceKind, location: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            location: location.into(),
            assigned_to: None,
        }
    }

    pub(crate) fn with_assignment(mut self, assigned_to: Option<IncidentId>) -> Self {
        self.assigned_to = assigned_to;
        self
    }

    pub fn id(&self) -> ResourceId {
        self.id
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn is_available(&self) -> bool {
        self.assigned_to.is_none()
    }

    pub fn assigned_incident(&self) -> Option<IncidentId> {
        self.assigned_to
    }

    pub(crate) fn assign(&mut self, incident: IncidentId) {
        self.assigned_to = Some(incident);
    }

    /// Returns the incident the resource was released from, if any.
    pub(crate) fn release(&mut self) -> Option<IncidentId> {
        self.assigned_to.take()
    }
}
