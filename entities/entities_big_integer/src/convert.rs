//! Predicates and Machine Integer Conversions
//!
//! Sign and parity predicates, range checks against the 32- and 64-bit
//! machine integer types, and the range-checked conversions themselves.
//!
//! The `to_*` conversions treat an out-of-range value as a caller bug and
//! panic; use the matching `fits_*` predicate or the `try_to_*` variant
//! when the range is not known in advance.

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

use std::cmp::Ordering;

use malachite::base::num::arithmetic::traits::Parity;
use malachite::base::num::basic::traits::Zero;
use malachite::base::num::conversion::traits::WrappingFrom;
use malachite::Integer;

use crate::error::{contract_violation, TryFromBigIntegerError};
use crate::BigInteger;

/// Generates `fits_*`, `try_to_*` and `to_*` for one machine integer type.
macro_rules! machine_conversions {
    ($t:ty, $fits:ident, $try_to:ident, $to:ident) => {
        #[doc = concat!("Check whether the value lies in the range of `", stringify!($t), "`.")]
        pub fn $fits(&self) -> bool {
            <$t>::try_from(self.as_integer()).is_ok()
        }

        #[doc = concat!("Convert to `", stringify!($t), "`, or `None` when out of range.")]
        pub fn $try_to(&self) -> Option<$t> {
            <$t>::try_from(self.as_integer()).ok()
        }

        #[doc = concat!("Convert to `", stringify!($t), "`.")]
        ///
        /// # Panics
        ///
        #[doc = concat!("Panics if [`BigInteger::", stringify!($fits), "`] is false.")]
        #[track_caller]
        pub fn $to(&self) -> $t {
            match <$t>::try_from(self.as_integer()) {
                Ok(value) => value,
                Err(_) => contract_violation(
                    stringify!($to),
                    concat!("value does not fit in ", stringify!($t)),
                ),
            }
        }
    };
}

impl BigInteger {
    /// Sign of the value: -1, 0 or 1.
    pub fn sgn(&self) -> i32 {
        match self.as_integer().cmp(&Integer::ZERO) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    pub fn is_neg(&self) -> bool {
        self.sgn() < 0
    }

    pub fn is_pos(&self) -> bool {
        self.sgn() > 0
    }

    pub fn is_zero(&self) -> bool {
        self.sgn() == 0
    }

    pub fn is_nonneg(&self) -> bool {
        self.sgn() >= 0
    }

    pub fn is_nonpos(&self) -> bool {
        self.sgn() <= 0
    }

    /// True when the value is divisible by two. Holds for negatives too.
    pub fn even(&self) -> bool {
        self.as_integer().even()
    }

    pub fn odd(&self) -> bool {
        !self.even()
    }

    machine_conversions!(i32, fits_i32, try_to_i32, to_i32);
    machine_conversions!(u32, fits_u32, try_to_u32, to_u32);
    machine_conversions!(i64, fits_i64, try_to_i64, to_i64);
    machine_conversions!(u64, fits_u64, try_to_u64, to_u64);

    /// Cheap hash derived from the low bits of the value.
    ///
    /// The low 63 bits of the magnitude are taken with the sign applied, then
    /// truncated to 32 bits. Equal values always hash equal; distinct large
    /// values collide freely. `std::hash::Hash` is unaffected by this.
    pub fn hash_code(&self) -> u32 {
        let low = i64::wrapping_from(&self.magnitude()) & i64::MAX;
        let signed = if self.is_neg() { -low } else { low };
        signed as u32
    }
}

/// Generates `TryFrom<&BigInteger>` for one machine integer type.
macro_rules! try_from_big_integer {
    ($t:ty, $try_to:ident) => {
        impl TryFrom<&BigInteger> for $t {
            type Error = TryFromBigIntegerError;

            fn try_from(value: &BigInteger) -> Result<Self, Self::Error> {
                value
                    .$try_to()
                    .ok_or(TryFromBigIntegerError::new(stringify!($t)))
            }
        }
    };
}

try_from_big_integer!(i32, try_to_i32);
try_from_big_integer!(u32, try_to_u32);
try_from_big_integer!(i64, try_to_i64);
try_from_big_integer!(u64, try_to_u64);
