//! Identifiers and closed enumerations shared by the entity records.

use serde::Serialize;
use std::fmt;

/// Identifier of an incident, unique within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct IncidentId(pub u32);

impl fmt::Display for IncidentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a resource, unique within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ResourceId(pub u32);

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Urgency of an incident. `High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Priority {
    #[serde(rename = "Low")]
    Low = 1,
    #[serde(rename = "Medium")]
    Medium = 2,
    #[serde(rename = "High")]
    High = 3,
}

impl Priority {
    /// All priorities, most urgent first.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Numeric rank; higher is more urgent.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Upper-case name used in persisted snapshots (`"HIGH"`).
    pub fn name(self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }

    /// Human-readable label (`"High"`).
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Looks up a priority by its exact persisted name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kinds of response resources the system knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ResourceKind {
    #[serde(rename = "Ambulance")]
    Ambulance,
    #[serde(rename = "Fire Truck")]
    FireTruck,
    #[serde(rename = "Medical Team")]
    MedicalTeam,
    #[serde(rename = "Police Unit")]
    PoliceUnit,
    #[serde(rename = "Search & Rescue Team")]
    SearchRescueTeam,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Ambulance,
        ResourceKind::FireTruck,
        ResourceKind::MedicalTeam,
        ResourceKind::PoliceUnit,
        ResourceKind::SearchRescueTeam,
    ];

    /// Canonical label, also the persisted form.
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Ambulance => "Ambulance",
            ResourceKind::FireTruck => "Fire Truck",
            ResourceKind::MedicalTeam => "Medical Team",
            ResourceKind::PoliceUnit => "Police Unit",
            ResourceKind::SearchRescueTeam => "Search & Rescue Team",
        }
    }

    /// Looks up a kind by its exact canonical label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.label() == label)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle of an incident: `Pending -> InProgress -> Resolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IncidentStatus {
    #[serde(rename = "Pending")]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Resolved")]
    Resolved,
}

impl IncidentStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [IncidentStatus; 3] = [
        IncidentStatus::Pending,
        IncidentStatus::InProgress,
        IncidentStatus::Resolved,
    ];

    pub fn label(self) -> &'static str {
        match self {
            IncidentStatus::Pending => "Pending",
            IncidentStatus::InProgress => "In Progress",
            IncidentStatus::Resolved => "Resolved",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// `Resolved` is the only terminal state.
    pub fn is_terminal(self) -> bool {
        self == IncidentStatus::Resolved
    }
}

impl fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of an incident's requirement list.
///
/// Intake only ever produces [`RequiredResource::Kind`]. Snapshots written
/// by older tooling may carry labels that name no known kind; those are
/// kept verbatim as [`RequiredResource::Unrecognized`] and simply never
/// match a resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RequiredResource {
    Kind(ResourceKind),
    Unrecognized(String),
}

impl RequiredResource {
    /// Maps a persisted label, keeping unknown labels as-is.
    pub fn from_label(label: &str) -> Self {
        match ResourceKind::from_label(label) {
            Some(kind) => RequiredResource::Kind(kind),
            None => RequiredResource::Unrecognized(label.to_string()),
        }
    }

    pub fn kind(&self) -> Option<ResourceKind> {
        match self {
            RequiredResource::Kind(kind) => Some(*kind),
            RequiredResource::Unrecognized(_) => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            RequiredResource::Kind(kind) => kind.label(),
            RequiredResource::Unrecognized(label) => label,
        }
    }
}

impl From<ResourceKind> for RequiredResource {
    fn from(kind: ResourceKind) -> Self {
        RequiredResource::Kind(kind)
    }
}

impl fmt::Display for RequiredResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
        assert_eq!(Priority::High.rank(), 3);
        assert_eq!(Priority::Low.rank(), 1);
    }

    #[test]
    fn test_priority_names() {
        assert_eq!(Priority::from_name("MEDIUM"), Some(Priority::Medium));
        assert_eq!(Priority::from_name("Medium"), None);
        assert_eq!(Priority::High.to_string(), "High");
    }

    #[test]
    fn test_kind_labels_round_trip() {
        for kind in ResourceKind::ALL {
            assert_eq!(ResourceKind::from_label(kind.label()), Some(kind));
        }
        assert_eq!(ResourceKind::from_label("fire truck"), None);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(
            IncidentStatus::from_label("In Progress"),
            Some(IncidentStatus::InProgress)
        );
        assert!(IncidentStatus::Resolved.is_terminal());
        assert!(!IncidentStatus::InProgress.is_terminal());
    }

    #[test]
    fn test_required_resource_unrecognized() {
        let req = RequiredResource::from_label("Dragon");
        assert_eq!(req.kind(), None);
        assert_eq!(req.label(), "Dragon");

        let req = RequiredResource::from_label("Police Unit");
        assert_eq!(req.kind(), Some(ResourceKind::PoliceUnit));
    }
}
