//! Bit Inspection
//!
//! Most significant bit position, perfect squares and powers of two.
//!
//! [`BigInteger::log2`] and [`BigInteger::mlog2`] return `0` outside their
//! domain. That collides with `log2(1) == 0`, so callers that need to tell
//! the cases apart must check the sign first.

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

use malachite::base::num::arithmetic::traits::{IsPowerOf2, SqrtRem, UnsignedAbs};
use malachite::base::num::basic::traits::Zero;
use malachite::base::num::logic::traits::SignificantBits;
use malachite::Natural;

use crate::BigInteger;

impl BigInteger {
    pub(crate) fn magnitude(&self) -> Natural {
        self.as_integer().unsigned_abs()
    }

    /// Zero-based index of the most significant set bit.
    ///
    /// Returns `0` when `self <= 0`. This sentinel is indistinguishable from
    /// `log2(1)`.
    pub fn log2(&self) -> u64 {
        if !self.is_pos() {
            return 0;
        }
        self.magnitude().significant_bits() - 1
    }

    /// `log2(-self)`.
    ///
    /// Returns `0` when `self >= 0`.
    pub fn mlog2(&self) -> u64 {
        if !self.is_neg() {
            return 0;
        }
        self.magnitude().significant_bits() - 1
    }

    /// True when `self == k * k` for some integer `k`. Negatives never are.
    pub fn perfect_square(&self) -> bool {
        if self.is_neg() {
            return false;
        }
        let (_, rem) = self.magnitude().sqrt_rem();
        rem == Natural::ZERO
    }

    /// True when `self` is a positive power of two.
    pub fn is_power_of_two(&self) -> bool {
        self.is_pos() && self.magnitude().is_power_of_2()
    }

    /// `Some(k)` when `self == 2^k`, otherwise `None`.
    pub fn power_of_two_shift(&self) -> Option<u64> {
        if self.is_power_of_two() {
            Some(self.log2())
        } else {
            None
        }
    }

    /// Out-parameter form of [`BigInteger::power_of_two_shift`].
    ///
    /// On success writes `k` into `shift` and returns true; otherwise
    /// returns false and leaves `shift` untouched.
    pub fn is_power_of_two_with_shift(&self, shift: &mut u64) -> bool {
        match self.power_of_two_shift() {
            Some(k) => {
                *shift = k;
                true
            }
            None => false,
        }
    }
}
