//! Snapshots and the file-backed store.

use super::config::StoreConfig;
use super::error::StoreError;
use super::records::{IncidentRecord, ResourceRecord};
use crate::allocation::AllocationEngine;
use crate::model::{Incident, Resource};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Full copy of both collections at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub incidents: Vec<Incident>,
    pub resources: Vec<Resource>,
}

impl Snapshot {
    pub fn of(engine: &AllocationEngine) -> Self {
        Self {
            incidents: engine.incidents().to_vec(),
            resources: engine.resources().to_vec(),
        }
    }

    /// Rebuilds an engine holding exactly this state.
    pub fn into_engine(self) -> Result<AllocationEngine, StoreError> {
        Ok(AllocationEngine::from_parts(self.incidents, self.resources)?)
    }

    pub fn to_records(&self) -> (Vec<IncidentRecord>, Vec<ResourceRecord>) {
        (
            self.incidents.iter().map(IncidentRecord::from).collect(),
            self.resources.iter().map(ResourceRecord::from).collect(),
        )
    }

    /// Converts records back into entities. Incident records without a
    /// timestamp are stamped with `loaded_at`.
    pub fn from_records(
        incidents: Vec<IncidentRecord>,
        resources: Vec<ResourceRecord>,
        loaded_at: DateTime<Utc>,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            incidents: incidents
                .into_iter()
                .map(|r| r.into_incident(loaded_at))
                .collect::<Result<_, _>>()?,
            resources: resources
                .into_iter()
                .map(ResourceRecord::into_resource)
                .collect::<Result<_, _>>()?,
        })
    }
}

/// Reads and writes snapshots as pretty-printed JSON files.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    config: StoreConfig,
}

impl SnapshotStore {
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        config.validate().map_err(StoreError::Config)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Loads both files. A missing file counts as an empty collection.
    pub fn load(&self, loaded_at: DateTime<Utc>) -> Result<Snapshot, StoreError> {
        let incidents: Vec<IncidentRecord> = read_records(&self.config.incidents_path)?;
        let resources: Vec<ResourceRecord> = read_records(&self.config.resources_path)?;
        let snapshot = Snapshot::from_records(incidents, resources, loaded_at)?;

        info!(
            incidents = snapshot.incidents.len(),
            resources = snapshot.resources.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Writes both files, creating parent directories as needed.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let (incidents, resources) = snapshot.to_records();
        write_records(&self.config.incidents_path, &incidents)?;
        write_records(&self.config.resources_path, &resources)?;

        info!(
            incidents = incidents.len(),
            resources = resources.len(),
            "snapshot saved"
        );
        Ok(())
    }
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no snapshot file, starting empty");
            return Ok(Vec::new());
        }
        Err(e) => return Err(io_error(path)(e)),
    };

    serde_json::from_str(&raw).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records
        .serialize(&mut serializer)
        .map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    fs::write(path, buf).map_err(io_error(path))
}
