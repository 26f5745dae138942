//! Error Types
//!
//! Parse failures and the `TryFrom` conversions are the recoverable errors of
//! the facade. Every other misuse is a caller bug and goes through
//! [`contract_violation`].

/// Error returned when base-10 text is not of the form `-?[0-9]+`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBigIntegerError {
    /// The input was empty, or consisted of a lone `-`.
    #[error("cannot parse integer from empty string")]
    Empty,
    /// A character other than an ASCII digit was found after the optional sign.
    #[error("invalid digit {found:?} at byte {position}")]
    InvalidDigit { position: usize, found: char },
}

/// Error returned by `TryFrom<&BigInteger>` when the value does not fit the
/// target machine integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("big integer out of range for {target}")]
pub struct TryFromBigIntegerError {
    target: &'static str,
}

impl TryFromBigIntegerError {
    pub(crate) fn new(target: &'static str) -> Self {
        Self { target }
    }

    /// Name of the machine integer type the conversion targeted.
    pub fn target(&self) -> &'static str {
        self.target
    }
}

/// Log a broken precondition as an error event, then panic.
#[cold]
#[track_caller]
pub(crate) fn contract_violation(operation: &'static str, detail: &str) -> ! {
    tracing::error!(operation, detail, "big integer contract violation");
    panic!("{operation}: {detail}");
}
