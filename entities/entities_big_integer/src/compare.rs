//! Comparison
//!
//! Total ordering of big integers, and mixed comparisons against machine
//! integers so callers can write `x < 0` or `x == 1u64` directly.

use std::cmp::Ordering;

use malachite::base::num::comparison::traits::OrdAbs;

use crate::BigInteger;

impl BigInteger {
    /// Compare two big integers (signed comparison)
    pub fn compare(&self, other: &Self) -> Ordering {
        self.as_integer().cmp(other.as_integer())
    }

    /// Compare against a signed machine integer
    pub fn compare_i64(&self, other: i64) -> Ordering {
        self.as_integer()
            .partial_cmp(&other)
            .expect("integer ordering is total")
    }

    /// Compare against an unsigned machine integer
    pub fn compare_u64(&self, other: u64) -> Ordering {
        self.as_integer()
            .partial_cmp(&other)
            .expect("integer ordering is total")
    }

    /// Compare absolute values, ignoring sign
    pub fn compare_abs(&self, other: &Self) -> Ordering {
        self.as_integer().cmp_abs(other.as_integer())
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Mixed equality and ordering with one machine integer type, both ways round.
macro_rules! machine_comparisons {
    ($t:ty, $widen:ty, $compare:ident) => {
        impl PartialEq<$t> for BigInteger {
            fn eq(&self, other: &$t) -> bool {
                self.$compare(<$widen>::from(*other)) == Ordering::Equal
            }
        }

        impl PartialOrd<$t> for BigInteger {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                Some(self.$compare(<$widen>::from(*other)))
            }
        }

        impl PartialEq<BigInteger> for $t {
            fn eq(&self, other: &BigInteger) -> bool {
                other == self
            }
        }

        impl PartialOrd<BigInteger> for $t {
            fn partial_cmp(&self, other: &BigInteger) -> Option<Ordering> {
                other.partial_cmp(self).map(Ordering::reverse)
            }
        }
    };
}

machine_comparisons!(i32, i64, compare_i64);
machine_comparisons!(i64, i64, compare_i64);
machine_comparisons!(u32, u64, compare_u64);
machine_comparisons!(u64, u64, compare_u64);
