//! Generic priority rule composition.
//!
//! Ranks items with an ordered list of scoring rules. Rules are applied
//! sequentially: a later rule is only consulted when every earlier rule
//! ties. Items that tie on every rule keep their original relative order,
//! so both sorting and best-candidate selection are stable.
//!
//! The allocation engine composes two rankings from this module: the
//! order in which incidents are served, and the choice of the nearest
//! candidate resource for a requirement.

mod engine;
mod types;

pub use engine::RuleEngine;
pub use types::PriorityRule;
