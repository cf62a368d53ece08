//! Read-only dashboard summaries.
//!
//! [`summarize`] derives counts from the current incident and resource
//! collections. Incident figures honour an optional [`ReportFilter`];
//! resource totals always cover the whole pool. Nothing here mutates
//! engine state.

mod aggregator;
mod render;
mod types;

pub use aggregator::summarize;
pub use render::export;
pub use types::{DashboardSummary, ReportFilter, ResourceTotals};
