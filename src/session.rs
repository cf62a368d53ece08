//! Host session: the engine plus the state needed to feed it.

use crate::allocation::{AllocationEngine, AllocationReport};
use crate::error::Result;
use crate::intake::{IdAllocator, IncidentDraft, ResourceDraft};
use crate::model::{IncidentId, ResourceId};
use crate::report::{self, summarize, DashboardSummary, ReportFilter};
use crate::store::Snapshot;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use std::path::Path;

/// Result of resolving an incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolveOutcome {
    pub incident: IncidentId,
    /// `false` if the incident was already resolved.
    pub newly_resolved: bool,
    /// Resources returned to the pool by the follow-up reclaim.
    pub released: usize,
}

/// Owns one allocation engine and the id allocator feeding it.
///
/// # Examples
///
/// ```
/// use u_dispatch::intake::{IncidentDraft, ResourceDraft};
/// use u_dispatch::Session;
///
/// let mut session = Session::new();
/// session.register_resource(&ResourceDraft::new("Fire Truck", "Zone 2")).unwrap();
///
/// let draft = IncidentDraft::new("Zone 1", "Warehouse fire", "High").requiring("fire truck");
/// let (_, report) = session.report_incident(&draft).unwrap();
/// assert_eq!(report.allocated_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    engine: AllocationEngine,
    ids: IdAllocator,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes from a snapshot without re-running allocation. New ids
    /// continue after the highest persisted ones.
    pub fn restore(snapshot: Snapshot) -> Result<Self> {
        let ids = IdAllocator::resume_after(&snapshot.incidents, &snapshot.resources);
        let engine = snapshot.into_engine()?;
        Ok(Self { engine, ids })
    }

    pub fn engine(&self) -> &AllocationEngine {
        &self.engine
    }

    /// Records an incident reported now and runs an allocation pass.
    pub fn report_incident(
        &mut self,
        draft: &IncidentDraft,
    ) -> Result<(IncidentId, AllocationReport)> {
        self.report_incident_at(draft, Utc::now())
    }

    /// Same as [`report_incident`](Self::report_incident) with an explicit
    /// report time.
    pub fn report_incident_at(
        &mut self,
        draft: &IncidentDraft,
        reported_at: DateTime<Utc>,
    ) -> Result<(IncidentId, AllocationReport)> {
        let incident = self.ids.incident(draft, reported_at)?;
        let id = incident.id();
        let report = self.engine.submit_incident(incident)?;
        Ok((id, report))
    }

    /// Adds a resource to the pool without allocating it.
    pub fn register_resource(&mut self, draft: &ResourceDraft) -> Result<ResourceId> {
        let resource = self.ids.resource(draft)?;
        let id = resource.id();
        self.engine.submit_resource(resource)?;
        Ok(id)
    }

    pub fn allocate(&mut self) -> AllocationReport {
        self.engine.allocate()
    }

    /// Resolves an incident and reclaims everything resolved incidents hold.
    pub fn resolve(&mut self, id: IncidentId) -> Result<ResolveOutcome> {
        let newly_resolved = self.engine.resolve(id)?;
        let released = self.engine.reclaim();
        Ok(ResolveOutcome {
            incident: id,
            newly_resolved,
            released,
        })
    }

    pub fn summary(&self, filter: &ReportFilter) -> DashboardSummary {
        summarize(self.engine.incidents(), self.engine.resources(), filter)
    }

    /// Writes the filtered dashboard to `path` and returns it.
    pub fn export_summary(
        &self,
        filter: &ReportFilter,
        path: impl AsRef<Path>,
        generated_at: NaiveDateTime,
    ) -> Result<DashboardSummary> {
        let summary = self.summary(filter);
        report::export(&summary, path, generated_at)?;
        Ok(summary)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(&self.engine)
    }
}
