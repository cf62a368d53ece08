//! Filter and summary types.

use crate::model::{Incident, IncidentStatus, Priority};
use serde::Serialize;
use std::collections::BTreeMap;

/// Optional incident filters, each a case-insensitive exact match.
///
/// Blank values are treated as absent.
///
/// # Examples
///
/// ```
/// use u_dispatch::report::ReportFilter;
///
/// let filter = ReportFilter::default()
///     .with_status("in progress")
///     .with_zone("Zone 1")
///     .with_priority("");
/// assert_eq!(filter.priority, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportFilter {
    /// Matched against the status label (`Pending`, `In Progress`, `Resolved`).
    pub status: Option<String>,
    /// Matched against the incident location.
    pub zone: Option<String>,
    /// Matched against the priority name (`High`, `Medium`, `Low`).
    pub priority: Option<String>,
}

fn non_blank(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn same(filter: &Option<String>, value: &str) -> bool {
    filter
        .as_deref()
        .map_or(true, |f| f.to_lowercase() == value.to_lowercase())
}

impl ReportFilter {
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = non_blank(status);
        self
    }

    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = non_blank(zone);
        self
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = non_blank(priority);
        self
    }

    /// Whether an incident passes every set filter.
    pub fn matches(&self, incident: &Incident) -> bool {
        same(&self.status, incident.status().label())
            && same(&self.zone, incident.location())
            && same(&self.priority, incident.priority().name())
    }
}

/// Whole-pool resource counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResourceTotals {
    pub total: usize,
    pub available: usize,
    pub assigned: usize,
}

/// Counts derived from the filtered incidents and the whole pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    /// The filter that produced this summary.
    pub filter: ReportFilter,

    /// Number of incidents passing the filter.
    pub total_incidents: usize,

    /// One bucket per status in lifecycle order, zero-filled.
    pub by_status: Vec<(IncidentStatus, usize)>,

    /// Observed priorities only, in first-seen order.
    pub by_priority: Vec<(Priority, usize)>,

    /// Incidents per location, sorted by label.
    pub by_zone: BTreeMap<String, usize>,

    /// Unfiltered pool totals.
    pub resources: ResourceTotals,
}

impl DashboardSummary {
    /// Count for one status bucket.
    pub fn status_count(&self, status: IncidentStatus) -> usize {
        self.by_status
            .iter()
            .find(|(s, _)| *s == status)
            .map_or(0, |(_, n)| *n)
    }
}
