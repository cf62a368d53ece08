//! Allocation engine: owns the incident and resource collections.

use super::error::EngineError;
use super::rules::{incident_order, proximity};
use super::types::{AllocationOutcome, AllocationReport};
use crate::model::{Incident, IncidentId, Resource, ResourceId, ResourceKind};
use crate::zone;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// Matches pooled resources to incidents.
///
/// The engine is the only writer of incident status, allocation lists and
/// resource assignments. It runs synchronously on the caller's thread;
/// hosts that share it across threads must wrap it in a single lock.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use u_dispatch::allocation::AllocationEngine;
/// use u_dispatch::model::*;
///
/// let mut engine = AllocationEngine::new();
/// engine
///     .submit_resource(Resource::new(ResourceId(1), ResourceKind::Ambulance, "Zone 2"))
///     .unwrap();
///
/// let incident = Incident::new(
///     IncidentId(1),
///     "Zone 3",
///     "Collision",
///     Priority::High,
///     vec![ResourceKind::Ambulance.into()],
///     Utc::now(),
/// );
/// let report = engine.submit_incident(incident).unwrap();
///
/// assert_eq!(report.allocated_count(), 1);
/// assert_eq!(
///     engine.incident(IncidentId(1)).unwrap().status(),
///     IncidentStatus::InProgress
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct AllocationEngine {
    incidents: Vec<Incident>,
    resources: Vec<Resource>,
}

impl AllocationEngine {
    /// Creates an engine with no incidents and an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds an engine from previously persisted collections.
    ///
    /// No allocation pass is run. An incident with an empty allocation list
    /// gets it rebuilt from the resources assigned to it, in pool order.
    /// Fails if ids repeat or if incidents and resources otherwise disagree
    /// about who holds what.
    pub fn from_parts(
        mut incidents: Vec<Incident>,
        resources: Vec<Resource>,
    ) -> Result<Self, EngineError> {
        let mut incident_ids = HashSet::new();
        for incident in &incidents {
            if !incident_ids.insert(incident.id()) {
                return Err(EngineError::DuplicateIncident(incident.id()));
            }
        }

        let mut pool: HashMap<ResourceId, &Resource> = HashMap::new();
        for resource in &resources {
            if pool.insert(resource.id(), resource).is_some() {
                return Err(EngineError::DuplicateResource(resource.id()));
            }
        }

        for incident in incidents
            .iter_mut()
            .filter(|i| i.allocated_resources().is_empty())
        {
            let assigned: Vec<ResourceId> = resources
                .iter()
                .filter(|r| r.assigned_incident() == Some(incident.id()))
                .map(Resource::id)
                .collect();
            if assigned.is_empty() {
                continue;
            }
            warn!(
                incident = %incident.id(),
                resources = assigned.len(),
                "allocation list missing, rebuilt from resource assignments"
            );
            for resource_id in assigned {
                incident.attach(resource_id);
            }
        }

        let mut holders: HashMap<ResourceId, IncidentId> = HashMap::new();
        for incident in &incidents {
            for &resource_id in incident.allocated_resources() {
                let resource = pool.get(&resource_id).ok_or(EngineError::DanglingAllocation {
                    incident: incident.id(),
                    resource: resource_id,
                })?;
                if resource.assigned_incident() != Some(incident.id()) {
                    return Err(EngineError::AssignmentMismatch {
                        incident: incident.id(),
                        resource: resource_id,
                    });
                }
                if holders.insert(resource_id, incident.id()).is_some() {
                    return Err(EngineError::DoubleAllocation(resource_id));
                }
            }
        }

        for resource in &resources {
            if let Some(incident) = resource.assigned_incident() {
                if holders.get(&resource.id()) != Some(&incident) {
                    return Err(EngineError::AssignmentMismatch {
                        incident,
                        resource: resource.id(),
                    });
                }
            }
        }

        Ok(Self {
            incidents,
            resources,
        })
    }

    /// All incidents, in submission order.
    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    /// The whole pool, in submission order.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn incident(&self, id: IncidentId) -> Option<&Incident> {
        self.incidents.iter().find(|i| i.id() == id)
    }

    pub fn resource(&self, id: ResourceId) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id() == id)
    }

    /// Records a new incident and immediately runs an allocation pass.
    pub fn submit_incident(&mut self, incident: Incident) -> Result<AllocationReport, EngineError> {
        if self.incident(incident.id()).is_some() {
            return Err(EngineError::DuplicateIncident(incident.id()));
        }

        info!(
            incident = %incident.id(),
            priority = %incident.priority(),
            location = incident.location(),
            "new incident reported"
        );
        self.incidents.push(incident);
        Ok(self.allocate())
    }

    /// Adds a resource to the pool. No allocation pass is triggered.
    pub fn submit_resource(&mut self, resource: Resource) -> Result<(), EngineError> {
        if self.resource(resource.id()).is_some() {
            return Err(EngineError::DuplicateResource(resource.id()));
        }

        debug!(
            resource = %resource.id(),
            kind = %resource.kind(),
            location = resource.location(),
            "resource added to pool"
        );
        self.resources.push(resource);
        Ok(())
    }

    /// Forces an incident to `Resolved`.
    ///
    /// Returns `false` if it was already resolved. Held resources stay
    /// assigned until [`reclaim`](Self::reclaim) runs.
    pub fn resolve(&mut self, id: IncidentId) -> Result<bool, EngineError> {
        let incident = self
            .incidents
            .iter_mut()
            .find(|i| i.id() == id)
            .ok_or(EngineError::UnknownIncident(id))?;

        let changed = incident.resolve();
        if changed {
            info!(incident = %id, "incident resolved");
        } else {
            debug!(incident = %id, "incident already resolved");
        }
        Ok(changed)
    }

    /// Runs one allocation pass over all non-resolved incidents.
    ///
    /// Each incident receives at most one resource per kind. Running the
    /// pass again without new incidents or freed resources changes nothing.
    pub fn allocate(&mut self) -> AllocationReport {
        let mut report = AllocationReport::default();
        let order = incident_order().sort_indices(&self.incidents, &());
        let proximity = proximity();

        for idx in order {
            if self.incidents[idx].status().is_terminal() {
                continue;
            }
            let incident_id = self.incidents[idx].id();

            for slot in 0..self.incidents[idx].required_resources().len() {
                let requirement = &self.incidents[idx].required_resources()[slot];
                let Some(kind) = requirement.kind() else {
                    debug!(
                        incident = %incident_id,
                        requirement = %requirement,
                        "waiting: unrecognized resource type"
                    );
                    report.outcomes.push(AllocationOutcome::Waiting {
                        incident: incident_id,
                        requirement: requirement.label().to_string(),
                    });
                    continue;
                };

                if self.holds_kind(idx, kind) {
                    continue;
                }

                let candidate = proximity
                    .select_best(
                        self.resources
                            .iter()
                            .filter(|r| r.kind() == kind && r.is_available()),
                        self.incidents[idx].location(),
                    )
                    .map(Resource::id)
                    .and_then(|id| self.resources.iter().position(|r| r.id() == id));

                let Some(pick) = candidate else {
                    debug!(incident = %incident_id, kind = %kind, "waiting: no available resource");
                    report.outcomes.push(AllocationOutcome::Waiting {
                        incident: incident_id,
                        requirement: kind.label().to_string(),
                    });
                    continue;
                };

                let resource = &mut self.resources[pick];
                let incident = &mut self.incidents[idx];
                resource.assign(incident_id);
                incident.attach(resource.id());

                let distance = zone::distance(resource.location(), incident.location());
                info!(
                    resource = %resource.id(),
                    kind = %kind,
                    from = resource.location(),
                    incident = %incident_id,
                    to = incident.location(),
                    distance,
                    "resource allocated"
                );
                report.outcomes.push(AllocationOutcome::Allocated {
                    incident: incident_id,
                    resource: resource.id(),
                    kind,
                    from: resource.location().to_string(),
                    to: incident.location().to_string(),
                    distance,
                });
            }

            let incident = &mut self.incidents[idx];
            if incident.is_fulfilled() && incident.promote() {
                info!(incident = %incident_id, "incident in progress");
                report.promoted.push(incident_id);
            }
        }

        report
    }

    /// Returns resources held by resolved incidents to the pool.
    ///
    /// Returns how many resources were freed. Safe to call repeatedly.
    pub fn reclaim(&mut self) -> usize {
        let mut released = 0;

        for incident in self
            .incidents
            .iter_mut()
            .filter(|i| i.status().is_terminal())
        {
            for resource_id in incident.detach_all() {
                match self.resources.iter_mut().find(|r| r.id() == resource_id) {
                    Some(resource) => {
                        if resource.release().is_some() {
                            released += 1;
                        }
                        info!(
                            resource = %resource_id,
                            incident = %incident.id(),
                            "resource released"
                        );
                    }
                    None => warn!(
                        resource = %resource_id,
                        incident = %incident.id(),
                        "held resource missing from pool"
                    ),
                }
            }
        }

        released
    }

    /// Whether the incident already holds a resource of `kind`.
    fn holds_kind(&self, idx: usize, kind: ResourceKind) -> bool {
        self.incidents[idx]
            .allocated_resources()
            .iter()
            .filter_map(|&id| self.resource(id))
            .any(|r| r.kind() == kind)
    }
}
