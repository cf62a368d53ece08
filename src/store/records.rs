//! On-disk record layout.

use super::error::StoreError;
use crate::model::{
    Incident, IncidentId, IncidentStatus, Priority, RequiredResource, Resource, ResourceId,
    ResourceKind,
};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted form of an [`Incident`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentRecord {
    pub incident_id: u32,
    pub location: String,
    pub emergency_type: String,
    /// Priority name: `HIGH`, `MEDIUM` or `LOW`.
    pub priority: String,
    /// Resource type labels, unknown ones preserved.
    pub required_resources: Vec<String>,
    /// Ids of held resources, in allocation order.
    #[serde(default)]
    pub allocated_resources: Vec<u32>,
    /// Status label.
    pub status: String,
    /// ISO-8601 report time.
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Persisted form of a [`Resource`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub resource_id: u32,
    /// Canonical kind label.
    pub resource_type: String,
    pub location: String,
    pub is_available: bool,
    pub assigned_to_incident: Option<u32>,
}

impl From<&Incident> for IncidentRecord {
    fn from(incident: &Incident) -> Self {
        Self {
            incident_id: incident.id().0,
            location: incident.location().to_string(),
            emergency_type: incident.emergency_type().to_string(),
            priority: incident.priority().name().to_string(),
            required_resources: incident
                .required_resources()
                .iter()
                .map(|r| r.label().to_string())
                .collect(),
            allocated_resources: incident.allocated_resources().iter().map(|r| r.0).collect(),
            status: incident.status().label().to_string(),
            timestamp: Some(incident.created_at().to_rfc3339()),
        }
    }
}

impl From<&Resource> for ResourceRecord {
    fn from(resource: &Resource) -> Self {
        Self {
            resource_id: resource.id().0,
            resource_type: resource.kind().label().to_string(),
            location: resource.location().to_string(),
            is_available: resource.is_available(),
            assigned_to_incident: resource.assigned_incident().map(|i| i.0),
        }
    }
}

impl IncidentRecord {
    /// Rebuilds the incident. A missing timestamp defaults to `loaded_at`.
    pub fn into_incident(self, loaded_at: DateTime<Utc>) -> Result<Incident, StoreError> {
        let id = self.incident_id;
        let priority = Priority::from_name(&self.priority)
            .or_else(|| self.priority.parse().ok())
            .ok_or_else(|| {
                StoreError::Record(format!("incident {id}: unknown priority '{}'", self.priority))
            })?;
        let status = IncidentStatus::from_label(&self.status).ok_or_else(|| {
            StoreError::Record(format!("incident {id}: unknown status '{}'", self.status))
        })?;
        let created_at = match self.timestamp.as_deref() {
            Some(raw) => parse_timestamp(raw).ok_or_else(|| {
                StoreError::Record(format!("incident {id}: unreadable timestamp '{raw}'"))
            })?,
            None => loaded_at,
        };

        let required = self
            .required_resources
            .iter()
            .map(|label| RequiredResource::from_label(label))
            .collect();
        let allocated = self.allocated_resources.into_iter().map(ResourceId).collect();

        Ok(Incident::new(
            IncidentId(id),
            self.location,
            self.emergency_type,
            priority,
            required,
            created_at,
        )
        .with_state(status, allocated))
    }
}

impl ResourceRecord {
    pub fn into_resource(self) -> Result<Resource, StoreError> {
        let kind = ResourceKind::from_label(&self.resource_type).ok_or_else(|| {
            StoreError::Record(format!(
                "resource {}: unknown resource type '{}'",
                self.resource_id, self.resource_type
            ))
        })?;
        if self.is_available != self.assigned_to_incident.is_none() {
            return Err(StoreError::Inconsistent(self.resource_id));
        }

        Ok(Resource::new(ResourceId(self.resource_id), kind, self.location)
            .with_assignment(self.assigned_to_incident.map(IncidentId)))
    }
}

/// Accepts RFC 3339 and offset-less ISO-8601 timestamps; the latter are
/// taken as UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> IncidentRecord {
        IncidentRecord {
            incident_id: 3,
            location: "Zone 3".into(),
            emergency_type: "Flood".into(),
            priority: "MEDIUM".into(),
            required_resources: vec!["Ambulance".into(), "Dragon".into()],
            allocated_resources: vec![5],
            status: "In Progress".into(),
            timestamp: Some("2025-04-01T09:30:15.250000".into()),
        }
    }

    #[test]
    fn test_incident_record_restores_state() {
        let incident = record().into_incident(Utc::now()).unwrap();

        assert_eq!(incident.priority(), Priority::Medium);
        assert_eq!(incident.status(), IncidentStatus::InProgress);
        assert_eq!(incident.allocated_resources(), &[ResourceId(5)]);
        assert_eq!(
            incident.required_resources()[1],
            RequiredResource::Unrecognized("Dragon".into())
        );
        assert_eq!(
            incident.created_at().to_rfc3339(),
            "2025-04-01T09:30:15.250+00:00"
        );
    }

    #[test]
    fn test_missing_timestamp_uses_load_time() {
        let loaded_at = DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp");
        let mut raw = record();
        raw.timestamp = None;
        assert_eq!(raw.into_incident(loaded_at).unwrap().created_at(), loaded_at);
    }

    #[test]
    fn test_bad_fields_rejected() {
        let mut raw = record();
        raw.status = "Closed".into();
        assert!(matches!(raw.into_incident(Utc::now()), Err(StoreError::Record(_))));

        let mut raw = record();
        raw.priority = "URGENT".into();
        assert!(matches!(raw.into_incident(Utc::now()), Err(StoreError::Record(_))));

        let mut raw = record();
        raw.timestamp = Some("yesterday".into());
        assert!(matches!(raw.into_incident(Utc::now()), Err(StoreError::Record(_))));
    }

    #[test]
    fn test_resource_record_consistency() {
        let busy = ResourceRecord {
            resource_id: 5,
            resource_type: "Search & Rescue Team".into(),
            location: "Zone 2".into(),
            is_available: false,
            assigned_to_incident: Some(3),
        };
        let resource = busy.clone().into_resource().unwrap();
        assert_eq!(resource.kind(), ResourceKind::SearchRescueTeam);
        assert_eq!(resource.assigned_incident(), Some(IncidentId(3)));
        assert_eq!(ResourceRecord::from(&resource), busy);

        let contradictory = ResourceRecord {
            is_available: true,
            ..busy
        };
        assert!(matches!(
            contradictory.into_resource(),
            Err(StoreError::Inconsistent(5))
        ));
    }

    #[test]
    fn test_unknown_resource_type_rejected() {
        let raw = ResourceRecord {
            resource_id: 1,
            resource_type: "Dragon".into(),
            location: "Zone 1".into(),
            is_available: true,
            assigned_to_incident: None,
        };
        assert!(matches!(raw.into_resource(), Err(StoreError::Record(_))));
    }
}
