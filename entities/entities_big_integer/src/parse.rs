//! Base-10 Parsing
//!
//! Accepts exactly `-?[0-9]+`. Leading zeros are allowed; whitespace and an
//! explicit `+` are not.

use std::str::FromStr;

use malachite::{Integer, Natural};

use crate::error::ParseBigIntegerError;
use crate::BigInteger;

impl BigInteger {
    /// Parse a base-10 integer with an optional leading `-`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseBigIntegerError::Empty`] when there are no digits and
    /// [`ParseBigIntegerError::InvalidDigit`] at the first byte that is not an
    /// ASCII digit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_big_integer::{BigInteger, ParseBigIntegerError};
    ///
    /// assert_eq!(BigInteger::from_decimal_str("-0042").unwrap(), BigInteger::from(-42));
    /// assert_eq!(BigInteger::from_decimal_str(""), Err(ParseBigIntegerError::Empty));
    /// assert!(BigInteger::from_decimal_str("+1").is_err());
    /// ```
    pub fn from_decimal_str(s: &str) -> Result<Self, ParseBigIntegerError> {
        let (negative, digits_start) = match s.as_bytes().first() {
            Some(b'-') => (true, 1),
            _ => (false, 0),
        };
        let digits = &s[digits_start..];
        if digits.is_empty() {
            tracing::debug!(len = s.len(), "rejected empty integer literal");
            return Err(ParseBigIntegerError::Empty);
        }
        if let Some((offset, found)) = digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            let position = digits_start + offset;
            tracing::debug!(len = s.len(), position, "rejected integer literal");
            return Err(ParseBigIntegerError::InvalidDigit { position, found });
        }

        let magnitude =
            Natural::from_str(digits).expect("non-empty run of ASCII digits parses");
        let value = Integer::from(magnitude);
        Ok(Self::from_integer(if negative { -value } else { value }))
    }
}

impl FromStr for BigInteger {
    type Err = ParseBigIntegerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_str(s)
    }
}

impl TryFrom<&str> for BigInteger {
    type Error = ParseBigIntegerError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::from_decimal_str(s)
    }
}
