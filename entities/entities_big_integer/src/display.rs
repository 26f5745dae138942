//! Base-10 Rendering
//!
//! Leading `-` for negatives, no `+`, no padding; zero renders as `0`.
//! The output parses back to the same value.

use std::fmt;

use crate::BigInteger;

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_integer(), f)
    }
}
