//! Store errors.

use crate::allocation::EngineError;
use std::io;
use std::path::PathBuf;

/// Errors raised while loading or saving snapshots.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed snapshot {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record field holds a value outside its domain.
    #[error("invalid record: {0}")]
    Record(String),

    /// A resource's availability flag disagrees with its assignment.
    #[error("resource {0}: is_available contradicts assigned_to_incident")]
    Inconsistent(u32),

    /// Records are individually valid but do not form a consistent state.
    #[error("snapshot does not restore: {0}")]
    Restore(#[from] EngineError),

    #[error("invalid store configuration: {0}")]
    Config(String),
}
