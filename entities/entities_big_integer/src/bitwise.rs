//! Bitwise Operations
//!
//! And, or, xor and complement act as if each operand were an infinite
//! two's complement bit string. Malachite uses the same semantics, so the
//! operators delegate directly. `!x == -x - 1` for every `x`.

use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign,
};

use crate::BigInteger;

macro_rules! forward_bitop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident) => {
        impl $imp<BigInteger> for BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: BigInteger) -> BigInteger {
                BigInteger::from_integer($imp::$method(self.into_integer(), rhs.into_integer()))
            }
        }

        impl $imp<&BigInteger> for BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: &BigInteger) -> BigInteger {
                BigInteger::from_integer($imp::$method(self.into_integer(), rhs.as_integer()))
            }
        }

        impl $imp<BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: BigInteger) -> BigInteger {
                BigInteger::from_integer($imp::$method(self.as_integer(), rhs.into_integer()))
            }
        }

        impl $imp<&BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: &BigInteger) -> BigInteger {
                BigInteger::from_integer($imp::$method(self.as_integer(), rhs.as_integer()))
            }
        }

        impl $assign_imp<BigInteger> for BigInteger {
            fn $assign_method(&mut self, rhs: BigInteger) {
                $assign_imp::$assign_method(self.as_integer_mut(), rhs.into_integer());
            }
        }

        impl $assign_imp<&BigInteger> for BigInteger {
            fn $assign_method(&mut self, rhs: &BigInteger) {
                $assign_imp::$assign_method(self.as_integer_mut(), rhs.as_integer());
            }
        }
    };
}

forward_bitop!(BitAnd, bitand, BitAndAssign, bitand_assign);
forward_bitop!(BitOr, bitor, BitOrAssign, bitor_assign);
forward_bitop!(BitXor, bitxor, BitXorAssign, bitxor_assign);

impl Not for BigInteger {
    type Output = BigInteger;

    fn not(self) -> BigInteger {
        BigInteger::from_integer(!self.into_integer())
    }
}

impl Not for &BigInteger {
    type Output = BigInteger;

    fn not(self) -> BigInteger {
        BigInteger::from_integer(!self.as_integer())
    }
}

/// `x << k` is `x * 2^k`. There is no `>>`; use [`BigInteger::div2k`] for
/// truncating division by a power of two.
impl Shl<u32> for BigInteger {
    type Output = BigInteger;

    fn shl(mut self, k: u32) -> BigInteger {
        self.mul2k(k);
        self
    }
}

impl Shl<u32> for &BigInteger {
    type Output = BigInteger;

    fn shl(self, k: u32) -> BigInteger {
        self.clone() << k
    }
}

impl ShlAssign<u32> for BigInteger {
    fn shl_assign(&mut self, k: u32) {
        self.mul2k(k);
    }
}

impl BigInteger {
    /// Replace the value with its complement, `-self - 1`.
    pub fn complement(&mut self) {
        let value = self.take();
        *self = !value;
    }
}
