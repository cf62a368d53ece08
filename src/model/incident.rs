//! Incident record and its status transitions.

use super::types::{IncidentId, IncidentStatus, Priority, RequiredResource, ResourceId};
use chrono::{DateTime, Utc};

/// An emergency that needs one or more typed resources.
#[derive(Debug, Clone, PartialEq)]
pub struct Incident {
    id: IncidentId,
    location: String,
    emergency_type: String,
    priority: Priority,
    required: Vec<RequiredResource>,
    allocated: Vec<ResourceId>,
    status: IncidentStatus,
    created_at: DateTime<Utc>,
}

impl Incident {
    /// Creates a new `Pending` incident with nothing allocated.
    pub fn new(
        id: IncidentId,
        location: impl Into<String>,
        emergency_type: impl Into<String>,
        priority: Priority,
        required: Vec<RequiredResource>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            location: location.into(),
            emergency_type: emergency_type.into(),
            priority,
            required,
            allocated: Vec::new(),
            status: IncidentStatus::Pending,
            created_at,
        }
    }

    /// Replaces the mutable state with values read from a snapshot.
    pub(crate) fn with_state(mut self, status: IncidentStatus, allocated: Vec<ResourceId>) -> Self {
        self.status = status;
        self.allocated = allocated;
        self
    }

    pub fn id(&self) -> IncidentId {
        self.id
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn emergency_type(&self) -> &str {
        &self.emergency_type
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn required_resources(&self) -> &[RequiredResource] {
        &self.required
    }

    /// Resources held, in allocation order.
    pub fn allocated_resources(&self) -> &[ResourceId] {
        &self.allocated
    }

    pub fn status(&self) -> IncidentStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// True once as many resources are held as were required.
    ///
    /// This compares counts only. Kind coverage is guaranteed by the
    /// allocation loop, not by this predicate.
    pub fn is_fulfilled(&self) -> bool {
        self.allocated.len() >= self.required.len()
    }

    pub(crate) fn attach(&mut self, resource: ResourceId) {
        self.allocated.push(resource);
    }

    pub(crate) fn detach_all(&mut self) -> Vec<ResourceId> {
        std::mem::take(&mut self.allocated)
    }

    /// `Pending -> InProgress`. Returns whether the status changed.
    pub(crate) fn promote(&mut self) -> bool {
        if self.status == IncidentStatus::Pending {
            self.status = IncidentStatus::InProgress;
            true
        } else {
            false
        }
    }

    /// Any non-terminal state `-> Resolved`. Returns whether the status changed.
    pub(crate) fn resolve(&mut self) -> bool {
        if self.status.is_terminal() {
            false
        } else {
            self.status = IncidentStatus::Resolved;
            true
        }
    }
}
