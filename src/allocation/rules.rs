//! Ranking rules used by the allocation pass.

use crate::dispatching::{PriorityRule, RuleEngine};
use crate::model::{Incident, Resource};
use crate::zone;

/// Most urgent priority first.
pub struct ByPriority;

impl PriorityRule<Incident, ()> for ByPriority {
    fn name(&self) -> &str {
        "ByPriority"
    }

    fn score(&self, incident: &Incident, _ctx: &()) -> i64 {
        -i64::from(incident.priority().rank())
    }
}

/// Earliest reported first.
pub struct ByReportTime;

impl PriorityRule<Incident, ()> for ByReportTime {
    fn name(&self) -> &str {
        "ByReportTime"
    }

    fn score(&self, incident: &Incident, _ctx: &()) -> i64 {
        incident.created_at().timestamp_micros()
    }
}

/// Nearest to the context location first.
pub struct ByZoneDistance;

impl PriorityRule<Resource, str> for ByZoneDistance {
    fn name(&self) -> &str {
        "ByZoneDistance"
    }

    fn score(&self, resource: &Resource, location: &str) -> i64 {
        i64::from(zone::distance(resource.location(), location))
    }
}

/// Order in which incidents are served.
pub fn incident_order() -> RuleEngine<Incident, ()> {
    RuleEngine::new().with_rule(ByPriority).with_rule(ByReportTime)
}

/// Candidate ranking for a requirement, relative to the incident location.
pub fn proximity() -> RuleEngine<Resource, str> {
    RuleEngine::new().with_rule(ByZoneDistance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{IncidentId, Priority, ResourceId, ResourceKind};
    use chrono::DateTime;

    fn incident(id: u32, priority: Priority, secs: i64) -> Incident {
        let at = DateTime::from_timestamp(1_700_000_000 + secs, 0).expect("valid timestamp");
        Incident::new(IncidentId(id), "Zone 1", "Test", priority, vec![], at)
    }

    #[test]
    fn test_incident_order() {
        let incidents = vec![
            incident(1, Priority::Low, 0),
            incident(2, Priority::High, 30),
            incident(3, Priority::Medium, 10),
            incident(4, Priority::High, 20),
        ];
        let ids: Vec<u32> = incident_order()
            .sort(&incidents, &())
            .iter()
            .map(|i| i.id().0)
            .collect();
        assert_eq!(ids, vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_proximity_prefers_nearest() {
        let pool = vec![
            Resource::new(ResourceId(1), ResourceKind::Ambulance, "Zone 9"),
            Resource::new(ResourceId(2), ResourceKind::Ambulance, "Zone 4"),
            Resource::new(ResourceId(3), ResourceKind::Ambulance, "Depot"),
        ];
        let best = proximity().select_best(&pool, "Zone 5").map(|r| r.id());
        assert_eq!(best, Some(ResourceId(2)));
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(incident_order().rule_names(), vec!["ByPriority", "ByReportTime"]);
        assert_eq!(proximity().rule_names(), vec!["ByZoneDistance"]);
    }
}
