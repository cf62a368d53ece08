//! Label parsing and distance computation.

/// Distance reported when either label carries no zone number.
pub const UNREACHABLE_DISTANCE: u32 = 99;

/// Extracts the first run of ASCII digits in a location label.
///
/// Returns `None` if the label contains no digits or the number does not
/// fit in a `u64`.
///
/// # Examples
///
/// ```
/// use u_dispatch::zone::zone_number;
///
/// assert_eq!(zone_number("Zone 10"), Some(10));
/// assert_eq!(zone_number("Z3"), Some(3));
/// assert_eq!(zone_number("Unknown"), None);
/// ```
pub fn zone_number(label: &str) -> Option<u64> {
    let start = label.find(|c: char| c.is_ascii_digit())?;
    let digits = &label[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}

/// Proximity score between two location labels.
///
/// Symmetric, zero for identical parseable labels, and
/// [`UNREACHABLE_DISTANCE`] when either side does not parse. Gaps wider
/// than `u32::MAX` saturate.
///
/// # Examples
///
/// ```
/// use u_dispatch::zone::distance;
///
/// assert_eq!(distance("Zone 1", "Zone 3"), 2);
/// assert_eq!(distance("A", "B"), 99);
/// ```
pub fn distance(a: &str, b: &str) -> u32 {
    match (zone_number(a), zone_number(b)) {
        (Some(za), Some(zb)) => u32::try_from(za.abs_diff(zb)).unwrap_or(u32::MAX),
        _ => UNREACHABLE_DISTANCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zone_number_valid() {
        assert_eq!(zone_number("Zone 1"), Some(1));
        assert_eq!(zone_number("Zone 10"), Some(10));
        assert_eq!(zone_number("Z3"), Some(3));
        assert_eq!(zone_number("Sector 4 North 9"), Some(4));
    }

    #[test]
    fn test_zone_number_invalid() {
        assert_eq!(zone_number("Unknown"), None);
        assert_eq!(zone_number(""), None);
        assert_eq!(zone_number("Zone 99999999999999999999999"), None);
    }

    #[test]
    fn test_large_zone_numbers() {
        assert_eq!(zone_number("Zone 99999999999"), Some(99_999_999_999));
        assert_eq!(distance("Zone 10000000000", "Zone 10000000005"), 5);
        assert_eq!(distance("Zone 1", "Zone 99999999999"), u32::MAX);
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance("Zone 1", "Zone 3"), 2);
        assert_eq!(distance("Zone 5", "Zone 2"), 3);
        assert_eq!(distance("Zone 7", "Zone 7"), 0);
    }

    #[test]
    fn test_distance_unparseable() {
        assert_eq!(distance("A", "B"), UNREACHABLE_DISTANCE);
        assert_eq!(distance("Zone X", "Zone 3"), UNREACHABLE_DISTANCE);
        assert_eq!(distance("Zone 3", "Zone X"), UNREACHABLE_DISTANCE);
    }

    proptest! {
        #[test]
        fn prop_distance_symmetric(
            a in "[A-Za-z ]{0,6}[0-9]{0,4}",
            b in "[A-Za-z ]{0,6}[0-9]{0,4}",
        ) {
            prop_assert_eq!(distance(&a, &b), distance(&b, &a));
        }

        #[test]
        fn prop_distance_identity(n in 0u32..100_000) {
            let label = format!("Zone {n}");
            prop_assert_eq!(distance(&label, &label), 0);
        }

        #[test]
        fn prop_distance_is_abs_diff(x in 0u32..10_000, y in 0u32..10_000) {
            let d = distance(&format!("Zone {x}"), &format!("Zone {y}"));
            prop_assert_eq!(d, x.abs_diff(y));
        }
    }
}
