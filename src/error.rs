//! Crate-wide error type.

use crate::allocation::EngineError;
use crate::intake::IntakeError;
use crate::store::StoreError;

/// Common result type for session operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for session operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Intake(#[from] IntakeError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to export report: {0}")]
    Export(#[from] std::io::Error),
}
