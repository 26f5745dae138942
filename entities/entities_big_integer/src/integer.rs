//! Big Integer Value Type
//!
//! Provides the [`BigInteger`] value type and its lifecycle: construction,
//! deep copy, constant-time swap and take.
//!
//! This module uses the `malachite` crate as the magnitude engine. Each
//! `BigInteger` owns its `malachite::Integer` outright; nothing is shared
//! between copies.

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

use malachite::base::num::basic::traits::Zero;
use malachite::Integer;

/// Arbitrary precision signed integer.
///
/// Wraps malachite's `Integer`. Cloning performs a deep copy, moving
/// transfers ownership, and dropping releases the magnitude. The value is
/// always fully constructed: there is no observable "moved-from" state,
/// and [`BigInteger::take`] leaves zero behind.
///
/// Zero has sign `0`; there is no negative zero.
///
/// # Examples
///
/// ```rust
/// use entities_big_integer::BigInteger;
///
/// let a = BigInteger::from(-42);
/// let mut b = a.clone();
/// b.neg_assign();
/// assert_eq!(a, BigInteger::from(-42));
/// assert_eq!(b, BigInteger::from(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigInteger {
    value: Integer,
}

impl BigInteger {
    /// Create a big integer with value zero.
    pub fn new() -> Self {
        Self {
            value: Integer::ZERO,
        }
    }

    /// Create a new big number from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from i32
    pub fn from_i32(value: i32) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u32
    pub fn from_u32(value: u32) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Exchange the values of `self` and `other`.
    ///
    /// Constant time; never allocates.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.value, &mut other.value);
    }

    /// Move the value out, leaving zero in its place.
    pub fn take(&mut self) -> Self {
        Self {
            value: std::mem::replace(&mut self.value, Integer::ZERO),
        }
    }

    /// Borrow the engine value (for sibling number types in this crate)
    pub(crate) fn as_integer(&self) -> &Integer {
        &self.value
    }

    /// Mutably borrow the engine value
    pub(crate) fn as_integer_mut(&mut self) -> &mut Integer {
        &mut self.value
    }

    /// Wrap an engine value
    pub(crate) fn from_integer(value: Integer) -> Self {
        Self { value }
    }

    /// Unwrap into the engine value
    pub(crate) fn into_integer(self) -> Integer {
        self.value
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        Self::new()
    }
}

impl From<i64> for BigInteger {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u64> for BigInteger {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<i32> for BigInteger {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

impl From<u32> for BigInteger {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}
