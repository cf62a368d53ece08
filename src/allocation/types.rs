//! Outcomes of an allocation pass.

use crate::model::{IncidentId, ResourceId, ResourceKind};
use serde::Serialize;
use std::fmt;

/// What happened to one requirement during a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AllocationOutcome {
    /// A resource was assigned to the incident.
    Allocated {
        incident: IncidentId,
        resource: ResourceId,
        kind: ResourceKind,
        /// Resource location.
        from: String,
        /// Incident location.
        to: String,
        distance: u32,
    },

    /// No available resource could fill the requirement.
    Waiting {
        incident: IncidentId,
        requirement: String,
    },
}

impl fmt::Display for AllocationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocated {
                incident,
                resource,
                kind,
                from,
                to,
                distance,
            } => write!(
                f,
                "{kind} #{resource} dispatched from {from} to {to} \
                 (distance {distance}) for incident #{incident}"
            ),
            Self::Waiting {
                incident,
                requirement,
            } => write!(f, "incident #{incident} waiting for {requirement}"),
        }
    }
}

/// Result of one allocation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AllocationReport {
    /// One entry per requirement processed, in processing order.
    pub outcomes: Vec<AllocationOutcome>,

    /// Incidents promoted from `Pending` to `InProgress` by this pass.
    pub promoted: Vec<IncidentId>,
}

impl AllocationReport {
    /// Number of assignments made.
    pub fn allocated_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, AllocationOutcome::Allocated { .. }))
            .count()
    }

    /// Number of requirements left waiting.
    pub fn waiting_count(&self) -> usize {
        self.outcomes.len() - self.allocated_count()
    }
}
