//! Text dashboard rendering and export.

use super::types::DashboardSummary;
use chrono::NaiveDateTime;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

impl fmt::Display for DashboardSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = |v: &Option<String>| v.clone().unwrap_or_else(|| "All".to_string());

        writeln!(f, "===== DASHBOARD SUMMARY =====")?;
        writeln!(f)?;
        writeln!(
            f,
            " Filters Applied: {} / {} / {}",
            shown(&self.filter.status),
            shown(&self.filter.zone),
            shown(&self.filter.priority)
        )?;

        writeln!(f)?;
        writeln!(f, " Total Filtered Incidents: {}", self.total_incidents)?;
        for (status, n) in &self.by_status {
            writeln!(f, "   - {:<11}: {}", status.label(), n)?;
        }

        writeln!(f)?;
        writeln!(f, " Incident Priorities:")?;
        for (priority, n) in &self.by_priority {
            writeln!(f, "   - {:<8}: {}", priority.label(), n)?;
        }

        writeln!(f)?;
        writeln!(f, " Incidents per Zone:")?;
        for (zone, n) in &self.by_zone {
            writeln!(f, "   - {zone:<10}: {n}")?;
        }

        writeln!(f)?;
        writeln!(f, " Resources: {}", self.resources.total)?;
        writeln!(f, "   - Available : {}", self.resources.available)?;
        writeln!(f, "   - Assigned  : {}", self.resources.assigned)?;
        write!(f, "==============================")
    }
}

/// Writes the text dashboard to `path`, headed by its generation time.
///
/// Missing parent directories are created.
pub fn export(
    summary: &DashboardSummary,
    path: impl AsRef<Path>,
    generated_at: NaiveDateTime,
) -> io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let body = format!(
        "Report generated on: {}\n{}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S"),
        summary
    );
    fs::write(path, body)
}

#[cfg(test)]
mod tests {
    use crate::model::{Incident, IncidentId, Priority, Resource, ResourceId, ResourceKind};
    use crate::report::{export, summarize, ReportFilter};
    use chrono::{DateTime, NaiveDate};

    fn summary() -> crate::report::DashboardSummary {
        let at = DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp");
        let incidents = vec![Incident::new(
            IncidentId(1),
            "Zone 1",
            "Fire",
            Priority::High,
            vec![ResourceKind::FireTruck.into()],
            at,
        )];
        let resources = vec![Resource::new(ResourceId(1), ResourceKind::Ambulance, "Zone 2")];
        summarize(
            &incidents,
            &resources,
            &ReportFilter::default().with_priority("high"),
        )
    }

    #[test]
    fn test_render_sections() {
        let text = summary().to_string();

        assert!(text.starts_with("===== DASHBOARD SUMMARY ====="));
        assert!(text.contains(" Filters Applied: All / All / high"));
        assert!(text.contains(" Total Filtered Incidents: 1"));
        assert!(text.contains("   - Pending    : 1"));
        assert!(text.contains("   - In Progress: 0"));
        assert!(text.contains("   - High    : 1"));
        assert!(text.contains("   - Zone 1    : 1"));
        assert!(text.contains("   - Available : 1"));
        assert!(text.contains("   - Assigned  : 0"));
    }

    #[test]
    fn test_export_writes_header() {
        let dir = tempfile::tempdir().expect("tempdir must be created");
        let path = dir.path().join("reports").join("dashboard_summary.txt");
        let generated = NaiveDate::from_ymd_opt(2025, 3, 4)
            .and_then(|d| d.and_hms_opt(5, 6, 7))
            .expect("valid date");

        export(&summary(), &path, generated).expect("export must succeed");

        let written = std::fs::read_to_string(&path).expect("file must exist");
        assert!(written.starts_with("Report generated on: 2025-03-04 05:06:07\n====="));
        assert!(written.contains(" Resources: 1"));
    }
}
