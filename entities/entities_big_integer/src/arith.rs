//! Arithmetic Operations
//!
//! Ring operators for big integers, mixed with the 32- and 64-bit machine
//! integer types on the right-hand side, plus the fused and in-place helpers.
//!
//! ## Conventions
//!
//! - `/` and `%` truncate: `7 / -2 == -3`, `7 % -2 == 1`, `-7 / 2 == -3`,
//!   `-7 % 2 == -1`. The remainder carries the sign of the dividend.
//! - Dividing by zero is a contract violation and panics. Use
//!   [`BigInteger::checked_div`] / [`BigInteger::checked_rem`] to test first.
//! - [`BigInteger::div2k`] truncates toward zero as well, unlike an
//!   arithmetic right shift.

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

use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use malachite::base::num::arithmetic::traits::{
    Abs, AbsAssign, AddMulAssign, NegAssign, Pow, SubMulAssign,
};
use malachite::base::num::basic::traits::Zero;
use malachite::Integer;

use crate::error::contract_violation;
use crate::BigInteger;

fn no_guard(_rhs: &BigInteger) {}

fn check_divisor(rhs: &BigInteger) {
    if rhs.is_zero() {
        contract_violation("division", "divisor is zero");
    }
}

fn check_modulus(rhs: &BigInteger) {
    if rhs.is_zero() {
        contract_violation("remainder", "divisor is zero");
    }
}

/// Implements a binary operator and its compound form for every
/// owned/borrowed combination, delegating to the engine after `$guard`.
macro_rules! forward_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $guard:path) => {
        impl $imp<BigInteger> for BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: BigInteger) -> BigInteger {
                $guard(&rhs);
                BigInteger::from_integer($imp::$method(self.into_integer(), rhs.into_integer()))
            }
        }

        impl $imp<&BigInteger> for BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: &BigInteger) -> BigInteger {
                $guard(rhs);
                BigInteger::from_integer($imp::$method(self.into_integer(), rhs.as_integer()))
            }
        }

        impl $imp<BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: BigInteger) -> BigInteger {
                $guard(&rhs);
                BigInteger::from_integer($imp::$method(self.as_integer(), rhs.into_integer()))
            }
        }

        impl $imp<&BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: &BigInteger) -> BigInteger {
                $guard(rhs);
                BigInteger::from_integer($imp::$method(self.as_integer(), rhs.as_integer()))
            }
        }

        impl $assign_imp<BigInteger> for BigInteger {
            fn $assign_method(&mut self, rhs: BigInteger) {
                $guard(&rhs);
                $assign_imp::$assign_method(self.as_integer_mut(), rhs.into_integer());
            }
        }

        impl $assign_imp<&BigInteger> for BigInteger {
            fn $assign_method(&mut self, rhs: &BigInteger) {
                $guard(rhs);
                $assign_imp::$assign_method(self.as_integer_mut(), rhs.as_integer());
            }
        }
    };
}

/// Same operator with a machine integer on the right-hand side.
macro_rules! forward_machine_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident; $($t:ty),*) => {
        $(
            impl $imp<$t> for BigInteger {
                type Output = BigInteger;

                fn $method(self, rhs: $t) -> BigInteger {
                    $imp::$method(self, BigInteger::from(rhs))
                }
            }

            impl $imp<$t> for &BigInteger {
                type Output = BigInteger;

                fn $method(self, rhs: $t) -> BigInteger {
                    $imp::$method(self, BigInteger::from(rhs))
                }
            }

            impl $assign_imp<$t> for BigInteger {
                fn $assign_method(&mut self, rhs: $t) {
                    $assign_imp::$assign_method(self, BigInteger::from(rhs));
                }
            }
        )*
    };
}

forward_binop!(Add, add, AddAssign, add_assign, no_guard);
forward_binop!(Sub, sub, SubAssign, sub_assign, no_guard);
forward_binop!(Mul, mul, MulAssign, mul_assign, no_guard);
forward_binop!(Div, div, DivAssign, div_assign, check_divisor);
forward_binop!(Rem, rem, RemAssign, rem_assign, check_modulus);

forward_machine_binop!(Add, add, AddAssign, add_assign; i32, i64, u32, u64);
forward_machine_binop!(Sub, sub, SubAssign, sub_assign; i32, i64, u32, u64);
forward_machine_binop!(Mul, mul, MulAssign, mul_assign; i32, i64, u32, u64);
forward_machine_binop!(Div, div, DivAssign, div_assign; i32, i64, u32, u64);
forward_machine_binop!(Rem, rem, RemAssign, rem_assign; i32, i64, u32, u64);

impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        BigInteger::from_integer(-self.into_integer())
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        BigInteger::from_integer(-self.as_integer())
    }
}

impl BigInteger {
    /// Negate in place.
    pub fn neg_assign(&mut self) {
        self.as_integer_mut().neg_assign();
    }

    /// Replace the value with its absolute value.
    pub fn abs_assign(&mut self) {
        self.as_integer_mut().abs_assign();
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self::from_integer(self.as_integer().clone().abs())
    }

    /// Truncated division, or `None` when `other` is zero.
    pub fn checked_div(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        Some(self / other)
    }

    /// Truncated remainder, or `None` when `other` is zero.
    ///
    /// The remainder carries the sign of `self`.
    pub fn checked_rem(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        Some(self % other)
    }

    /// Truncated quotient and remainder together.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    pub fn div_rem(&self, other: &Self) -> (Self, Self) {
        (self / other, self % other)
    }

    /// `self <- self + a * b`
    pub fn add_mul(&mut self, a: &Self, b: &Self) {
        self.as_integer_mut()
            .add_mul_assign(a.as_integer(), b.as_integer());
    }

    /// `self <- self - a * b`
    pub fn sub_mul(&mut self, a: &Self, b: &Self) {
        self.as_integer_mut()
            .sub_mul_assign(a.as_integer(), b.as_integer());
    }

    /// `self <- self * 2^k`, exact for either sign.
    pub fn mul2k(&mut self, k: u32) {
        *self.as_integer_mut() <<= u64::from(k);
    }

    /// `self <- self / 2^k`, truncating toward zero.
    ///
    /// `-17` divided by `2^2` gives `-4`, not the `-5` an arithmetic shift
    /// would produce.
    pub fn div2k(&mut self, k: u32) {
        let value = self.as_integer_mut();
        if *value < Integer::ZERO {
            let mut magnitude = -&*value;
            magnitude >>= u64::from(k);
            *value = -magnitude;
        } else {
            *value >>= u64::from(k);
        }
    }

    /// `self^k`. `power(0, 0)` is one.
    pub fn power(&self, k: u32) -> Self {
        Self::from_integer(self.as_integer().clone().pow(u64::from(k)))
    }
}

impl Sum for BigInteger {
    fn sum<I: Iterator<Item = BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::new(), |mut acc, x| {
            acc += x;
            acc
        })
    }
}

impl<'a> Sum<&'a BigInteger> for BigInteger {
    fn sum<I: Iterator<Item = &'a BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::new(), |mut acc, x| {
            acc += x;
            acc
        })
    }
}

impl Product for BigInteger {
    fn product<I: Iterator<Item = BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::from_i32(1), |mut acc, x| {
            acc *= x;
            acc
        })
    }
}

impl<'a> Product<&'a BigInteger> for BigInteger {
    fn product<I: Iterator<Item = &'a BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::from_i32(1), |mut acc, x| {
            acc *= x;
            acc
        })
    }
}

impl num_traits::Zero for BigInteger {
    fn zero() -> Self {
        BigInteger::new()
    }

    fn is_zero(&self) -> bool {
        BigInteger::is_zero(self)
    }
}

impl num_traits::One for BigInteger {
    fn one() -> Self {
        BigInteger::from_i32(1)
    }
}
