//! Entities Layer: Big Integer
//!
//! Provides an unbounded signed integer with value semantics.
//!
//! ## Overview
//!
//! [`BigInteger`] is a thin facade over `malachite::Integer`. The facade fixes
//! the arithmetic conventions callers can rely on:
//!
//! - Division and remainder truncate: the quotient rounds toward zero and the
//!   remainder carries the sign of the dividend.
//! - Bitwise operators act on the infinite two's complement representation,
//!   so `!x == -x - 1` for every `x`.
//! - [`BigInteger::log2`] and [`BigInteger::mlog2`] return `0` outside their
//!   domain instead of failing.
//! - Conversions to machine integers are range-checked.
//!
//! ## Modules
//!
//! - **integer**: the value type, construction, swap and take
//! - **parse**: base-10 text input
//! - **convert**: sign predicates, parity and machine integer conversions
//! - **compare**: total ordering, including against machine integers
//! - **arith**: ring operators, fused multiply-add/sub, shifts and powers
//! - **bitwise**: and, or, xor and complement
//! - **bits**: most significant bit, perfect squares and powers of two
//! - **number_theory**: gcd, extended gcd, lcm and integer roots
//! - **display**: base-10 rendering
//!
//! ## Error Handling
//!
//! Malformed text is reported through [`ParseBigIntegerError`]. Every other
//! contract violation (division by zero, out-of-range conversion, even root
//! of a negative number) panics after emitting a `tracing` error event. Each
//! of those operations has a non-panicking `checked_`/`try_` companion.
//!
//! ## Examples
//!
//! ```rust
//! use entities_big_integer::BigInteger;
//!
//! let a: BigInteger = "123456789012345678901234567890".parse().unwrap();
//! assert_eq!((a * 2i32).to_string(), "246913578024691357802469135780");
//!
//! assert_eq!(BigInteger::from(7) / BigInteger::from(-2), BigInteger::from(-3));
//! assert_eq!(BigInteger::from(-7) % BigInteger::from(2), BigInteger::from(-1));
//! ```

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

pub mod arith;
pub mod bits;
pub mod bitwise;
pub mod compare;
pub mod convert;
pub mod display;
pub mod error;
pub mod integer;
pub mod number_theory;
pub mod parse;

#[cfg(test)]
mod proptests;

pub use error::{ParseBigIntegerError, TryFromBigIntegerError};
pub use integer::BigInteger;
pub use number_theory::{gcd, gcdext, lcm, root, rootrem, ExtendedGcd};
