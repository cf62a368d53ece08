//! Priority- and proximity-driven allocation of emergency response
//! resources to incidents.
//!
//! - **Zone**: distance between location labels such as `"Zone 7"`.
//! - **Model**: incident and resource records with their lifecycles.
//! - **Dispatching**: generic sequential priority-rule ranking with
//!   stable tie-breaking.
//! - **Allocation**: the greedy engine that matches resources to
//!   incidents and reclaims them when incidents are resolved.
//! - **Report**: read-only dashboard summaries.
//! - **Intake**: strict parsing of free-text input and id assignment.
//! - **Store**: JSON snapshot persistence.
//!
//! # Architecture
//!
//! The engine is an explicit value owning both collections and runs
//! synchronously; there is no global state. A [`Session`] pairs it with
//! an id allocator and is the entry point used by the `u-dispatch`
//! binary.

pub mod allocation;
pub mod dispatching;
pub mod error;
pub mod intake;
pub mod model;
pub mod report;
pub mod session;
pub mod store;
pub mod zone;

pub use error::{Error, Result};
pub use session::{ResolveOutcome, Session};
