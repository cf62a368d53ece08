//! Boundary between free-text input and the entity model.
//!
//! Text tokens are mapped onto the closed [`Priority`](crate::model::Priority)
//! and [`ResourceKind`](crate::model::ResourceKind) enums here; anything
//! unrecognised is rejected before it reaches the engine. Identifiers come
//! from an [`IdAllocator`] owned by the session.

mod error;
mod ids;
mod parse;
mod types;

pub use error::IntakeError;
pub use ids::IdAllocator;
pub use parse::parse_requirements;
pub use types::{IncidentDraft, ResourceDraft};
