//! Value objects: equality by value, not identity.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify"
/// one, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Closed interval `[min, max]`; both ends inclusive.
///
/// Used for the price and created-at filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "(T, T)", into = "(T, T)")]
#[serde(bound(
    serialize = "T: Clone + Serialize",
    deserialize = "T: PartialOrd + core::fmt::Debug + Deserialize<'de>"
))]
pub struct Bounds<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + core::fmt::Debug> Bounds<T> {
    /// Build an interval, rejecting `min > max`.
    pub fn new(min: T, max: T) -> CatalogResult<Self> {
        if min > max {
            return Err(CatalogError::validation(format!(
                "range start {min:?} is after range end {max:?}"
            )));
        }
        Ok(Self { min, max })
    }

    /// Build an interval from two ends given in either order.
    ///
    /// Two-thumb sliders can report their values crossed.
    pub fn ordered(a: T, b: T) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    pub fn min(&self) -> &T {
        &self.min
    }

    pub fn max(&self) -> &T {
        &self.max
    }

    /// Inclusive membership test.
    pub fn contains(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }

    /// True when `other` lies entirely inside `self`.
    pub fn encloses(&self, other: &Bounds<T>) -> bool {
        other.min >= self.min && other.max <= self.max
    }
}

impl<T: Clone + PartialEq + core::fmt::Debug> ValueObject for Bounds<T> {}

impl<T: PartialOrd + core::fmt::Debug> TryFrom<(T, T)> for Bounds<T> {
    type Error = CatalogError;

    fn try_from((min, max): (T, T)) -> Result<Self, Self::Error> {
        Self::new(min, max)
    }
}

impl<T> From<Bounds<T>> for (T, T) {
    fn from(value: Bounds<T>) -> Self {
        (value.min, value.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn contains_is_inclusive_at_both_ends() {
        let b = Bounds::new(0.0, 20.0).unwrap();
        assert!(b.contains(&0.0));
        assert!(b.contains(&20.0));
        assert!(!b.contains(&20.01));
        assert!(!b.contains(&-0.01));
    }

    #[test]
    fn rejects_inverted_range() {
        let err = Bounds::new(5, 1).unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[test]
    fn ordered_swaps_crossed_ends() {
        let b = Bounds::ordered(90, 10);
        assert_eq!((*b.min(), *b.max()), (10, 90));
        assert_eq!(Bounds::ordered(1, 2), Bounds::new(1, 2).unwrap());
    }

    #[test]
    fn degenerate_range_holds_single_value() {
        let b = Bounds::new(7, 7).unwrap();
        assert!(b.contains(&7));
        assert!(!b.contains(&6));
    }

    #[test]
    fn deserializes_from_pair_and_validates() {
        let b: Bounds<u32> = serde_json::from_str("[10, 25]").unwrap();
        assert_eq!((*b.min(), *b.max()), (10, 25));
        assert!(serde_json::from_str::<Bounds<u32>>("[25, 10]").is_err());
    }

    #[test]
    fn encloses_checks_both_ends() {
        let outer = Bounds::new(0, 200).unwrap();
        assert!(outer.encloses(&Bounds::new(0, 100).unwrap()));
        assert!(!outer.encloses(&Bounds::new(50, 250).unwrap()));
    }

    proptest! {
        #[test]
        fn contains_matches_manual_comparison(
            a in -1000i64..1000,
            b in -1000i64..1000,
            v in -1500i64..1500,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let bounds = Bounds::new(lo, hi).unwrap();
            prop_assert_eq!(bounds.contains(&v), lo <= v && v <= hi);
        }
    }
}
