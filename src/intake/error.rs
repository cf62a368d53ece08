//! Intake errors.

/// Input rejected at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("unknown priority '{0}' (expected High, Medium or Low)")]
    UnknownPriority(String),

    #[error("unknown resource type '{0}'")]
    UnknownResourceKind(String),

    #[error("at least one required resource type must be given")]
    NoRequirements,

    #[error("location must not be empty")]
    EmptyLocation,

    #[error("no {0} ids left")]
    IdsExhausted(&'static str),
}
