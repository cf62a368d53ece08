//! Raw, unvalidated entity input.

/// Text fields describing a new incident.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidentDraft {
    pub location: String,
    pub emergency_type: String,
    pub priority: String,
    /// Requirement tokens; each may be a comma-separated list.
    pub required: Vec<String>,
}

impl IncidentDraft {
    pub fn new(
        location: impl Into<String>,
        emergency_type: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            emergency_type: emergency_type.into(),
            priority: priority.into(),
            required: Vec::new(),
        }
    }

    /// Appends a requirement token.
    pub fn requiring(mut self, kind: impl Into<String>) -> Self {
        self.required.push(kind.into());
        self
    }
}

/// Text fields describing a new resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceDraft {
    pub kind: String,
    pub location: String,
}

impl ResourceDraft {
    pub fn new(kind: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            location: location.into(),
        }
    }
}
