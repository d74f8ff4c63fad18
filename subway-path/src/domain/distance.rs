//! Travel distance between stations.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A non-negative travel distance.
///
/// Section distances are always positive (enforced by [`Section`]), while
/// totals start from [`Distance::ZERO`]. Addition saturates rather than
/// wrapping, so an absurdly long route can never look short.
///
/// [`Section`]: super::Section
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Distance(u64);

impl Distance {
    pub const ZERO: Distance = Distance(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Distance {
    type Output = Distance;

    fn add(self, rhs: Distance) -> Distance {
        Distance(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Distance>>(iter: I) -> Self {
        iter.fold(Distance::ZERO, Add::add)
    }
}

impl From<u64> for Distance {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_default() {
        assert_eq!(Distance::default(), Distance::ZERO);
        assert!(Distance::ZERO.is_zero());
        assert!(!Distance::new(1).is_zero());
    }

    #[test]
    fn addition() {
        assert_eq!(Distance::new(3) + Distance::new(2), Distance::new(5));
    }

    #[test]
    fn addition_saturates() {
        assert_eq!(
            Distance::new(u64::MAX) + Distance::new(1),
            Distance::new(u64::MAX)
        );
    }

    #[test]
    fn sum_of_empty_is_zero() {
        let total: Distance = std::iter::empty().sum();
        assert_eq!(total, Distance::ZERO);
    }

    #[test]
    fn ordering() {
        assert!(Distance::new(5) < Distance::new(20));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Summing matches plain integer addition while there is no overflow
        #[test]
        fn sum_matches_u64(values in prop::collection::vec(0u64..1_000_000, 0..50)) {
            let total: Distance = values.iter().copied().map(Distance::new).sum();
            prop_assert_eq!(total.get(), values.iter().sum::<u64>());
        }

        /// Adding never makes a distance shorter
        #[test]
        fn addition_is_monotonic(a in any::<u64>(), b in any::<u64>()) {
            let sum = Distance::new(a) + Distance::new(b);
            prop_assert!(sum >= Distance::new(a));
            prop_assert!(sum >= Distance::new(b));
        }
    }
}
