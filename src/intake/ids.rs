//! Session-scoped identifier allocation and entity construction.

use super::error::IntakeError;
use super::parse::parse_requirements;
use super::types::{IncidentDraft, ResourceDraft};
use crate::model::{
    Incident, IncidentId, Priority, RequiredResource, Resource, ResourceId, ResourceKind,
};
use chrono::{DateTime, Utc};

/// Hands out increasing incident and resource ids, starting at 1.
///
/// Ids are only consumed once a draft has been validated, so rejected
/// input leaves no gaps. Once `u32::MAX` has been handed out, further
/// requests fail with [`IntakeError::IdsExhausted`].
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use u_dispatch::intake::{IdAllocator, IncidentDraft};
///
/// let mut ids = IdAllocator::new();
/// let draft = IncidentDraft::new("Zone 4", "Flood", "high").requiring("Ambulance");
/// let incident = ids.incident(&draft, Utc::now()).unwrap();
/// assert_eq!(incident.id().0, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    /// `None` once the id space is used up.
    next_incident: Option<u32>,
    next_resource: Option<u32>,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self {
            next_incident: Some(1),
            next_resource: Some(1),
        }
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continues numbering after the highest ids already in use.
    pub fn resume_after(incidents: &[Incident], resources: &[Resource]) -> Self {
        let max_incident = incidents.iter().map(|i| i.id().0).max().unwrap_or(0);
        let max_resource = resources.iter().map(|r| r.id().0).max().unwrap_or(0);
        Self {
            next_incident: max_incident.checked_add(1),
            next_resource: max_resource.checked_add(1),
        }
    }

    pub fn next_incident_id(&mut self) -> Result<IncidentId, IntakeError> {
        take_next(&mut self.next_incident, "incident").map(IncidentId)
    }

    pub fn next_resource_id(&mut self) -> Result<ResourceId, IntakeError> {
        take_next(&mut self.next_resource, "resource").map(ResourceId)
    }

    /// Validates a draft and builds a `Pending` incident reported at `now`.
    pub fn incident(
        &mut self,
        draft: &IncidentDraft,
        now: DateTime<Utc>,
    ) -> Result<Incident, IntakeError> {
        let location = required_location(&draft.location)?;
        let priority: Priority = draft.priority.parse()?;
        let required = parse_requirements(&draft.required)?
            .into_iter()
            .map(RequiredResource::from)
            .collect();

        Ok(Incident::new(
            self.next_incident_id()?,
            location,
            draft.emergency_type.trim(),
            priority,
            required,
            now,
        ))
    }

    /// Validates a draft and builds an available resource.
    pub fn resource(&mut self, draft: &ResourceDraft) -> Result<Resource, IntakeError> {
        let location = required_location(&draft.location)?;
        let kind: ResourceKind = draft.kind.parse()?;
        Ok(Resource::new(self.next_resource_id()?, kind, location))
    }
}

fn take_next(slot: &mut Option<u32>, what: &'static str) -> Result<u32, IntakeError> {
    let id = slot.ok_or(IntakeError::IdsExhausted(what))?;
    *slot = id.checked_add(1);
    Ok(id)
}

fn required_location(location: &str) -> Result<&str, IntakeError> {
    let location = location.trim();
    if location.is_empty() {
        Err(IntakeError::EmptyLocation)
    } else {
        Ok(location)
    }
}
