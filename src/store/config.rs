//! Store configuration.

use std::path::{Path, PathBuf};

/// Where snapshots and exported reports live.
///
/// # Examples
///
/// ```
/// use u_dispatch::store::StoreConfig;
///
/// let config = StoreConfig::default().with_report_path("out/summary.txt");
/// assert!(config.incidents_path.ends_with("incidents.json"));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// JSON array of incident records.
    pub incidents_path: PathBuf,

    /// JSON array of resource records.
    pub resources_path: PathBuf,

    /// Default destination of exported dashboards.
    pub report_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::in_dir("data")
    }
}

impl StoreConfig {
    /// Both snapshot files inside `dir`; the report stays in the working
    /// directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            incidents_path: dir.join("incidents.json"),
            resources_path: dir.join("resources.json"),
            report_path: PathBuf::from("dashboard_summary.txt"),
        }
    }

    pub fn with_incidents_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.incidents_path = path.into();
        self
    }

    pub fn with_resources_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.resources_path = path.into();
        self
    }

    pub fn with_report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = path.into();
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.incidents_path.as_os_str().is_empty() {
            return Err("incidents_path must not be empty".into());
        }
        if self.resources_path.as_os_str().is_empty() {
            return Err("resources_path must not be empty".into());
        }
        if self.report_path.as_os_str().is_empty() {
            return Err("report_path must not be empty".into());
        }
        if self.incidents_path == self.resources_path {
            return Err(format!(
                "incidents and resources must be stored in different files, both are {}",
                self.incidents_path.display()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.incidents_path, PathBuf::from("data/incidents.json"));
        assert_eq!(config.resources_path, PathBuf::from("data/resources.json"));
        assert_eq!(config.report_path, PathBuf::from("dashboard_summary.txt"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_shared_file() {
        let config = StoreConfig::default()
            .with_incidents_path("state.json")
            .with_resources_path("state.json");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_path() {
        let config = StoreConfig::default().with_report_path("");
        assert_eq!(
            config.validate(),
            Err("report_path must not be empty".to_string())
        );
    }
}
