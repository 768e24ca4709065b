// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::TimeRange;

/// Returns true if two half-open ranges share any instant.
///
/// `a.end == b.start` is not an overlap.
#[must_use]
pub fn overlaps(a: &TimeRange, b: &TimeRange) -> bool {
    a.start() < b.end() && b.start() < a.end()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::time_input::parse_time_range;

    fn range(start: &str, end: &str) -> TimeRange {
        parse_time_range(Some(start), Some(end)).unwrap()
    }

    #[test]
    fn test_partial_overlap() {
        assert!(overlaps(&range("10:00", "12:00"), &range("11:00", "13:00")));
    }

    #[test]
    fn test_touching_boundary_is_not_overlap() {
        assert!(!overlaps(&range("10:00", "11:00"), &range("11:00", "13:00")));
        assert!(!overlaps(&range("11:00", "13:00"), &range("10:00", "11:00")));
    }

    #[test]
    fn test_containment_overlaps() {
        assert!(overlaps(&range("9:00", "17:00"), &range("12:00", "13:00")));
        assert!(overlaps(&range("12:00", "13:00"), &range("9:00", "17:00")));
    }

    #[test]
    fn test_identical_ranges_overlap() {
        assert!(overlaps(&range("9:00", "10:00"), &range("9:00", "10:00")));
    }

    #[test]
    fn test_disjoint_ranges() {
        assert!(!overlaps(&range("6:00 AM", "8:00 AM"), &range("6:00 PM", "8:00 PM")));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let samples = [
            range("8:00", "9:00"),
            range("8:30", "10:00"),
            range("9:00", "12:00"),
            range("11:59", "12:01"),
            range("0:00", "24:00"),
        ];
        for a in &samples {
            for b in &samples {
                assert_eq!(overlaps(a, b), overlaps(b, a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_twelve_hour_strings_compare_numerically() {
        // "10:00 AM" sorts before "9:00 AM" as a string.
        assert!(overlaps(&range("9:00 AM", "11:00 AM"), &range("10:00 AM", "1:00 PM")));
        assert!(!overlaps(&range("9:00 AM", "10:00 AM"), &range("10:00 AM", "1:00 PM")));
    }
}
