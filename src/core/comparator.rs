use crate::domain::ports::Comparator;
use std::cmp::Ordering;

/// Natural ascending order of `i32`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntComparator;

impl IntComparator {
    pub fn new() -> Self {
        Self
    }
}

impl Comparator for IntComparator {
    fn order(&self, a: i32, b: i32) -> Ordering {
        a.cmp(&b)
    }
}

/// Negative if `a < b`, zero if equal, positive if `a > b`. Only the sign
/// is meaningful. Never computes `a - b`, so the full `i32` range is safe.
pub fn compare(a: i32, b: i32) -> i32 {
    IntComparator.compare(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_cases() {
        assert!(compare(2, 1) > 0);
        assert!(compare(1, 2) < 0);
        assert_eq!(compare(5, 5), 0);
        assert!(compare(-3, 3) < 0);
        assert_eq!(compare(0, 0), 0);
    }

    #[test]
    fn test_extremes_do_not_overflow() {
        assert!(compare(i32::MIN, i32::MAX) < 0);
        assert!(compare(i32::MAX, i32::MIN) > 0);
        assert!(compare(i32::MIN, 1) < 0);
        assert_eq!(compare(i32::MIN, i32::MIN), 0);
    }

    #[test]
    fn test_order_matches_compare() {
        let comparator = IntComparator::new();
        assert_eq!(comparator.order(2, 1), Ordering::Greater);
        assert_eq!(comparator.order(-1, -1), Ordering::Equal);
        assert_eq!(comparator.order(-9, 4), Ordering::Less);
    }
}
