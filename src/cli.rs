//! Command-line surface of the `u-dispatch` binary.
//!
//! Every invocation loads the stored snapshot, runs one command and saves
//! the snapshot back if the command changed anything.
//!
//! ```bash
//! u-dispatch resource add "Fire Truck" "Zone 2"
//! u-dispatch incident add "Zone 1" "Warehouse fire" high --require "fire truck,ambulance"
//! u-dispatch incidents
//! u-dispatch resolve 1 --allocate
//! u-dispatch summary --zone "Zone 1" --export
//! ```

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tabled::{settings::Style, Table, Tabled};
use tracing::debug;

use u_dispatch::allocation::AllocationReport;
use u_dispatch::intake::{IncidentDraft, ResourceDraft};
use u_dispatch::model::{Incident, IncidentId, Resource, ResourceKind};
use u_dispatch::report::ReportFilter;
use u_dispatch::store::{IncidentRecord, ResourceRecord, SnapshotStore, StoreConfig};
use u_dispatch::Session;

/// Emergency resource dispatch
#[derive(Parser, Debug)]
#[command(name = "u-dispatch")]
#[command(author, version, about = "Allocate emergency resources to incidents")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding incidents.json and resources.json
    #[arg(long, global = true, default_value = "data")]
    pub data_dir: PathBuf,

    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Incident intake
    #[command(subcommand)]
    Incident(IncidentCommand),

    /// Resource registration
    #[command(subcommand)]
    Resource(ResourceCommand),

    /// List all incidents
    Incidents,

    /// List all resources
    Resources,

    /// Run an allocation pass
    Allocate,

    /// Resolve an incident and release its resources
    Resolve(ResolveArgs),

    /// Show the dashboard summary
    Summary(SummaryArgs),

    /// List recognised resource types
    Kinds,
}

#[derive(Subcommand, Debug)]
pub enum IncidentCommand {
    /// Report a new incident and allocate resources to it
    Add(IncidentArgs),
}

#[derive(Args, Debug)]
pub struct IncidentArgs {
    /// Location label, e.g. "Zone 3"
    pub location: String,

    /// Free-text emergency type
    pub emergency_type: String,

    /// High, Medium or Low
    pub priority: String,

    /// Required resource types; repeat or separate with commas
    #[arg(short, long = "require", required = true)]
    pub required: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum ResourceCommand {
    /// Add a resource to the pool
    Add(ResourceArgs),
}

#[derive(Args, Debug)]
pub struct ResourceArgs {
    /// Resource type, e.g. "Ambulance"
    pub kind: String,

    /// Location label, e.g. "Zone 1"
    pub location: String,
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Incident id
    pub id: u32,

    /// Run an allocation pass after releasing resources
    #[arg(long)]
    pub allocate: bool,
}

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Filter by status (Pending, In Progress, Resolved)
    #[arg(short, long)]
    pub status: Option<String>,

    /// Filter by location label
    #[arg(short, long)]
    pub zone: Option<String>,

    /// Filter by priority (High, Medium, Low)
    #[arg(short, long)]
    pub priority: Option<String>,

    /// Write the summary to a text file (defaults to dashboard_summary.txt
    /// in the working directory)
    #[arg(short, long, num_args = 0..=1, value_name = "PATH")]
    pub export: Option<Option<PathBuf>>,
}

#[derive(Tabled, Serialize)]
struct IncidentRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Type")]
    emergency_type: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Required")]
    required: String,
    #[tabled(rename = "Allocated")]
    allocated: String,
    #[tabled(rename = "Reported")]
    reported: String,
}

impl From<&Incident> for IncidentRow {
    fn from(incident: &Incident) -> Self {
        Self {
            id: incident.id().0,
            location: incident.location().to_string(),
            emergency_type: incident.emergency_type().to_string(),
            priority: incident.priority().label().to_string(),
            status: incident.status().label().to_string(),
            required: join(incident.required_resources()),
            allocated: join(incident.allocated_resources()),
            reported: incident
                .created_at()
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
        }
    }
}

#[derive(Tabled, Serialize)]
struct ResourceRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&Resource> for ResourceRow {
    fn from(resource: &Resource) -> Self {
        let status = match resource.assigned_incident() {
            Some(incident) => format!("Assigned to #{incident}"),
            None => "Available".to_string(),
        };
        Self {
            id: resource.id().0,
            kind: resource.kind().label().to_string(),
            location: resource.location().to_string(),
            status,
        }
    }
}

fn join<T: ToString>(items: &[T]) -> String {
    if items.is_empty() {
        return "-".to_string();
    }
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_table<T: Tabled>(rows: Vec<T>, empty: &str) {
    if rows.is_empty() {
        println!("{empty}");
    } else {
        println!("{}", Table::new(rows).with(Style::rounded()));
    }
}

fn print_report(report: &AllocationReport) {
    for outcome in &report.outcomes {
        println!("  {outcome}");
    }
    for id in &report.promoted {
        println!("  incident #{id} is now In Progress");
    }
}

/// Runs one command against the stored state.
pub fn run(cli: Cli) -> Result<()> {
    let store = SnapshotStore::new(StoreConfig::in_dir(&cli.data_dir))
        .context("invalid data directory")?;
    let snapshot = store
        .load(Utc::now())
        .with_context(|| format!("failed to load state from {}", cli.data_dir.display()))?;
    let mut session = Session::restore(snapshot).context("stored state is inconsistent")?;

    let mutated = execute(&mut session, &store, cli.command, cli.json)?;
    if mutated {
        store
            .save(&session.snapshot())
            .context("failed to save state")?;
    } else {
        debug!("state unchanged, skipping save");
    }
    Ok(())
}

fn execute(
    session: &mut Session,
    store: &SnapshotStore,
    command: Commands,
    json: bool,
) -> Result<bool> {
    match command {
        Commands::Incident(IncidentCommand::Add(args)) => {
            let mut draft = IncidentDraft::new(args.location, args.emergency_type, args.priority);
            draft.required = args.required;
            let (id, report) = session
                .report_incident(&draft)
                .context("incident rejected")?;

            if json {
                let value = json!({ "incident": id, "report": report });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("Incident #{id} reported.");
                print_report(&report);
            }
            Ok(true)
        }

        Commands::Resource(ResourceCommand::Add(args)) => {
            let draft = ResourceDraft::new(args.kind, args.location);
            let id = session
                .register_resource(&draft)
                .context("resource rejected")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&json!({ "resource": id }))?);
            } else {
                println!("Resource #{id} added.");
            }
            Ok(true)
        }

        Commands::Incidents => {
            let incidents = session.engine().incidents();
            if json {
                let records: Vec<IncidentRecord> = incidents.iter().map(Into::into).collect();
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                let rows: Vec<IncidentRow> = incidents.iter().map(Into::into).collect();
                print_table(rows, "No incidents reported.");
            }
            Ok(false)
        }

        Commands::Resources => {
            let resources = session.engine().resources();
            if json {
                let records: Vec<ResourceRecord> = resources.iter().map(Into::into).collect();
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                let rows: Vec<ResourceRow> = resources.iter().map(Into::into).collect();
                print_table(rows, "No resources registered.");
            }
            Ok(false)
        }

        Commands::Allocate => {
            let report = session.allocate();
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if report.outcomes.is_empty() {
                println!("Nothing to allocate.");
            } else {
                print_report(&report);
            }
            Ok(report.allocated_count() > 0 || !report.promoted.is_empty())
        }

        Commands::Resolve(args) => {
            let outcome = session
                .resolve(IncidentId(args.id))
                .with_context(|| format!("cannot resolve incident #{}", args.id))?;
            let report = args.allocate.then(|| session.allocate());

            if json {
                let value = json!({ "resolved": outcome, "report": report });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                if outcome.newly_resolved {
                    println!("Incident #{} resolved.", outcome.incident);
                } else {
                    println!("Incident #{} was already resolved.", outcome.incident);
                }
                println!("{} resource(s) released.", outcome.released);
                if let Some(report) = &report {
                    print_report(report);
                }
            }
            Ok(outcome.newly_resolved || outcome.released > 0)
        }

        Commands::Summary(args) => {
            let mut filter = ReportFilter::default();
            if let Some(status) = args.status {
                filter = filter.with_status(status);
            }
            if let Some(zone) = args.zone {
                filter = filter.with_zone(zone);
            }
            if let Some(priority) = args.priority {
                filter = filter.with_priority(priority);
            }
            let export_path = args
                .export
                .map(|path| path.unwrap_or_else(|| store.config().report_path.clone()));
            let summary = match &export_path {
                Some(path) => session
                    .export_summary(&filter, path, Local::now().naive_local())
                    .with_context(|| format!("failed to export report to {}", path.display()))?,
                None => session.summary(&filter),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{summary}");
                if let Some(path) = export_path {
                    println!("Report exported to {}", path.display());
                }
            }
            Ok(false)
        }

        Commands::Kinds => {
            let labels: Vec<&str> = ResourceKind::ALL.iter().map(|k| k.label()).collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&labels)?);
            } else {
                for label in labels {
                    println!("{label}");
                }
            }
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_incident_add() {
        let cli = Cli::try_parse_from([
            "u-dispatch",
            "--data-dir",
            "state",
            "incident",
            "add",
            "Zone 1",
            "Fire",
            "high",
            "--require",
            "Fire Truck,Ambulance",
            "-r",
            "Police Unit",
        ])
        .unwrap();

        assert_eq!(cli.data_dir, PathBuf::from("state"));
        match cli.command {
            Commands::Incident(IncidentCommand::Add(args)) => {
                assert_eq!(args.location, "Zone 1");
                assert_eq!(args.required, vec!["Fire Truck,Ambulance", "Police Unit"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_summary_export_forms() {
        let cli = Cli::try_parse_from(["u-dispatch", "summary", "--export"]).unwrap();
        match cli.command {
            Commands::Summary(args) => assert_eq!(args.export, Some(None)),
            other => panic!("unexpected command: {other:?}"),
        }

        let argv = ["u-dispatch", "summary", "-z", "Zone 2", "-e", "out.txt"];
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Commands::Summary(args) => {
                assert_eq!(args.zone.as_deref(), Some("Zone 2"));
                assert_eq!(args.export, Some(Some(PathBuf::from("out.txt"))));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_export_help_names_default_file() {
        let command = Cli::command();
        let summary = command.find_subcommand("summary").unwrap();
        let export = summary
            .get_arguments()
            .find(|arg| arg.get_id() == "export")
            .unwrap();
        let help = export.get_help().unwrap().to_string();
        let default = StoreConfig::default().report_path;
        assert!(help.contains(default.to_str().unwrap()));
    }

    #[test]
    fn test_incident_requires_resources() {
        assert!(Cli::try_parse_from(["u-dispatch", "incident", "add", "Zone 1", "Fire", "High"])
            .is_err());
    }

    #[test]
    fn test_commands_persist_state() {
        let dir = tempfile::tempdir().expect("tempdir must be created");
        let data_dir = dir.path().join("data");
        let invoke = |args: &[&str]| {
            let mut argv = vec!["u-dispatch", "--data-dir", data_dir.to_str().unwrap()];
            argv.extend_from_slice(args);
            run(Cli::try_parse_from(argv).unwrap())
        };

        invoke(&["resource", "add", "Ambulance", "Zone 2"]).unwrap();
        invoke(&["incident", "add", "Zone 1", "Crash", "High", "-r", "ambulance"]).unwrap();
        invoke(&["resolve", "1"]).unwrap();
        assert!(invoke(&["resolve", "7"]).is_err());

        let store = SnapshotStore::new(StoreConfig::in_dir(&data_dir)).unwrap();
        let session = Session::restore(store.load(Utc::now()).unwrap()).unwrap();
        let incident = session.engine().incident(IncidentId(1)).unwrap();
        assert!(incident.status().is_terminal());
        assert!(session.engine().resources()[0].is_available());

        let report_path = dir.path().join("report.txt");
        invoke(&["summary", "--export", report_path.to_str().unwrap()]).unwrap();
        let text = std::fs::read_to_string(&report_path).unwrap();
        assert!(text.starts_with("Report generated on: "));
    }

    #[test]
    fn test_rejected_incident_leaves_state_untouched() {
        let dir = tempfile::tempdir().expect("tempdir must be created");
        let data_dir = dir.path().join("data");
        let cli = Cli::try_parse_from([
            "u-dispatch",
            "--data-dir",
            data_dir.to_str().unwrap(),
            "incident",
            "add",
            "Zone 1",
            "Fire",
            "urgent",
            "-r",
            "Ambulance",
        ])
        .unwrap();

        assert!(run(cli).is_err());
        assert!(!data_dir.exists());
    }
}
