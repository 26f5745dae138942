//! Number Theory
//!
//! Greatest common divisor with Bezout coefficients, least common multiple,
//! and truncated integer roots.
//!
//! ## Conventions
//!
//! - `gcd` and `lcm` are never negative; `gcd(0, 0) == 0` and
//!   `lcm(a, 0) == lcm(0, b) == 0`.
//! - The Bezout coefficients of [`gcdext`] follow malachite's choice. Only
//!   `s * a + t * b == g` is guaranteed, not a particular `(s, t)`.
//! - `root(a, k)` rounds toward zero. Odd roots of negatives are negative;
//!   even roots of negatives are a contract violation.

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

use malachite::base::num::arithmetic::traits::{
    ExtendedGcd as EngineExtendedGcd, FloorRoot, Gcd, Lcm, RootRem,
};
use malachite::Integer;

use crate::error::contract_violation;
use crate::BigInteger;

/// Result of [`gcdext`]: `gcd == s * a + t * b`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtendedGcd {
    pub gcd: BigInteger,
    pub s: BigInteger,
    pub t: BigInteger,
}

/// Signed wrapper around a natural root, matching the sign of the radicand.
fn signed(negative: bool, magnitude: malachite::Natural) -> BigInteger {
    let value = Integer::from(magnitude);
    BigInteger::from_integer(if negative { -value } else { value })
}

impl BigInteger {
    /// Greatest common divisor, always non-negative.
    pub fn gcd(&self, other: &Self) -> Self {
        Self::from_integer(Integer::from(self.magnitude().gcd(other.magnitude())))
    }

    /// Greatest common divisor together with Bezout coefficients.
    pub fn gcdext(&self, other: &Self) -> ExtendedGcd {
        let (g, s, t) = self
            .as_integer()
            .clone()
            .extended_gcd(other.as_integer().clone());
        ExtendedGcd {
            gcd: Self::from_integer(Integer::from(g)),
            s: Self::from_integer(s),
            t: Self::from_integer(t),
        }
    }

    /// Least common multiple, always non-negative.
    pub fn lcm(&self, other: &Self) -> Self {
        Self::from_integer(Integer::from(self.magnitude().lcm(other.magnitude())))
    }

    /// Truncated `k`-th root, or `None` when `k == 0` or `k` is even and
    /// `self` is negative.
    pub fn checked_root(&self, k: u32) -> Option<Self> {
        if k == 0 || (self.is_neg() && k % 2 == 0) {
            return None;
        }
        Some(signed(self.is_neg(), self.magnitude().floor_root(u64::from(k))))
    }

    /// Truncated `k`-th root.
    ///
    /// # Panics
    ///
    /// Panics when `k == 0`, or when `k` is even and `self` is negative.
    #[track_caller]
    pub fn root(&self, k: u32) -> Self {
        self.check_root_domain(k);
        signed(self.is_neg(), self.magnitude().floor_root(u64::from(k)))
    }

    /// Truncated `k`-th root `r` and remainder `rem` with `self == r^k + rem`.
    ///
    /// The remainder is zero or carries the sign of `self`.
    ///
    /// # Panics
    ///
    /// Same domain as [`BigInteger::root`].
    #[track_caller]
    pub fn rootrem(&self, k: u32) -> (Self, Self) {
        self.check_root_domain(k);
        let negative = self.is_neg();
        let (root, rem) = self.magnitude().root_rem(u64::from(k));
        (signed(negative, root), signed(negative, rem))
    }

    #[track_caller]
    fn check_root_domain(&self, k: u32) {
        if k == 0 {
            contract_violation("root", "degree is zero");
        }
        if self.is_neg() && k % 2 == 0 {
            contract_violation("root", "even root of a negative number");
        }
    }
}

/// Greatest common divisor of `a` and `b`.
pub fn gcd(a: &BigInteger, b: &BigInteger) -> BigInteger {
    a.gcd(b)
}

/// Extended gcd of `a` and `b`.
pub fn gcdext(a: &BigInteger, b: &BigInteger) -> ExtendedGcd {
    a.gcdext(b)
}

/// Least common multiple of `a` and `b`.
pub fn lcm(a: &BigInteger, b: &BigInteger) -> BigInteger {
    a.lcm(b)
}

/// Truncated `k`-th root of `a`. See [`BigInteger::root`].
#[track_caller]
pub fn root(a: &BigInteger, k: u32) -> BigInteger {
    a.root(k)
}

/// Truncated `k`-th root of `a` and its remainder. See [`BigInteger::rootrem`].
#[track_caller]
pub fn rootrem(a: &BigInteger, k: u32) -> (BigInteger, BigInteger) {
    a.rootrem(k)
}
