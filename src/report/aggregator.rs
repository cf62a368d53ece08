//! Summary computation.

use super::types::{DashboardSummary, ReportFilter, ResourceTotals};
use crate::model::{Incident, IncidentStatus, Priority, Resource};
use std::collections::BTreeMap;

/// Builds a dashboard summary.
///
/// Incident counts cover only incidents accepted by `filter`; resource
/// totals always cover the whole pool.
pub fn summarize(
    incidents: &[Incident],
    resources: &[Resource],
    filter: &ReportFilter,
) -> DashboardSummary {
    let selected: Vec<&Incident> = incidents.iter().filter(|i| filter.matches(i)).collect();

    let by_status = IncidentStatus::ALL
        .into_iter()
        .map(|status| {
            let n = selected.iter().filter(|i| i.status() == status).count();
            (status, n)
        })
        .collect();

    let mut by_priority: Vec<(Priority, usize)> = Vec::new();
    let mut by_zone: BTreeMap<String, usize> = BTreeMap::new();
    for incident in &selected {
        match by_priority.iter_mut().find(|(p, _)| *p == incident.priority()) {
            Some((_, n)) => *n += 1,
            None => by_priority.push((incident.priority(), 1)),
        }
        *by_zone.entry(incident.location().to_string()).or_insert(0) += 1;
    }

    let available = resources.iter().filter(|r| r.is_available()).count();

    DashboardSummary {
        filter: filter.clone(),
        total_incidents: selected.len(),
        by_status,
        by_priority,
        by_zone,
        resources: ResourceTotals {
            total: resources.len(),
            available,
            assigned: resources.len() - available,
        },
    }
}
