//! Greedy priority/proximity allocation of resources to incidents.
//!
//! An allocation pass walks every non-resolved incident, most urgent
//! first (ties: earliest report first), and fills each unmet requirement
//! with the nearest available resource of that kind (ties: pool order).
//! Requirements that cannot be filled are reported as waiting and are
//! retried on the next pass.
//!
//! Resolving an incident does not free its resources by itself; the host
//! calls [`AllocationEngine::reclaim`] afterwards, and a later pass may
//! hand the freed resources to other incidents.
//!
//! The assignment is greedy and makes no optimality claim.

mod engine;
mod error;
mod rules;
mod types;

pub use engine::AllocationEngine;
pub use error::EngineError;
pub use rules::{incident_order, proximity, ByPriority, ByReportTime, ByZoneDistance};
pub use types::{AllocationOutcome, AllocationReport};
