//! Engine errors.

use crate::model::{IncidentId, ResourceId};

/// Errors raised by the allocation engine.
///
/// A requirement with no matching resource is not an error; it is
/// reported as [`crate::allocation::AllocationOutcome::Waiting`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("incident {0} already exists")]
    DuplicateIncident(IncidentId),

    #[error("resource {0} already exists")]
    DuplicateResource(ResourceId),

    #[error("incident {0} not found")]
    UnknownIncident(IncidentId),

    /// An incident lists a resource that is not in the pool.
    #[error("incident {incident} holds resource {resource}, which is not in the pool")]
    DanglingAllocation {
        incident: IncidentId,
        resource: ResourceId,
    },

    /// A resource and an incident disagree about who holds the resource.
    #[error("resource {resource} and incident {incident} disagree about their assignment")]
    AssignmentMismatch {
        incident: IncidentId,
        resource: ResourceId,
    },

    #[error("resource {0} is held by more than one incident")]
    DoubleAllocation(ResourceId),
}
