//! Token parsing for priorities and resource kinds.
//!
//! Matching ignores case and surrounding or repeated whitespace, so
//! `" fire   TRUCK "` parses as [`ResourceKind::FireTruck`].

use super::error::IntakeError;
use crate::model::{Priority, ResourceKind};
use std::str::FromStr;

fn normalize(token: &str) -> String {
    token
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl FromStr for Priority {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Priority::ALL
            .into_iter()
            .find(|p| p.label().to_lowercase() == wanted)
            .ok_or_else(|| IntakeError::UnknownPriority(s.trim().to_string()))
    }
}

impl FromStr for ResourceKind {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        ResourceKind::ALL
            .into_iter()
            .find(|k| k.label().to_lowercase() == wanted)
            .ok_or_else(|| IntakeError::UnknownResourceKind(s.trim().to_string()))
    }
}

/// Parses a requirement list.
///
/// Each token may itself be a comma-separated list; blank entries are
/// skipped. Fails on the first unknown kind, or if nothing remains.
///
/// # Examples
///
/// ```
/// use u_dispatch::intake::parse_requirements;
/// use u_dispatch::model::ResourceKind;
///
/// let kinds = parse_requirements(["ambulance, Fire Truck"]).unwrap();
/// assert_eq!(kinds, vec![ResourceKind::Ambulance, ResourceKind::FireTruck]);
/// ```
pub fn parse_requirements<I, S>(tokens: I) -> Result<Vec<ResourceKind>, IntakeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut kinds = Vec::new();
    for token in tokens {
        for part in token.as_ref().split(',') {
            if part.trim().is_empty() {
                continue;
            }
            kinds.push(part.parse()?);
        }
    }

    if kinds.is_empty() {
        return Err(IntakeError::NoRequirements);
    }
    Ok(kinds)
}
