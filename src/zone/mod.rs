//! Zone proximity metric.
//!
//! Locations are free-text labels such as `"Zone 7"`. The first run of
//! digits in a label is taken as its position on a one-dimensional zone
//! line, and proximity is the absolute difference of two positions.
//!
//! Labels without a position are never an error: they are ranked at
//! [`UNREACHABLE_DISTANCE`] so allocation can keep going.

mod distance;

pub use distance::{distance, zone_number, UNREACHABLE_DISTANCE};
