//! Property-based tests for the big integer facade.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;

use crate::{gcd, gcdext, lcm, root, BigInteger};

// Values spanning well past 64 bits: hi * 2^64 + lo
fn big_int() -> impl Strategy<Value = BigInteger> {
    (any::<i64>(), any::<u64>()).prop_map(|(hi, lo)| {
        let mut value = BigInteger::from(hi);
        value.mul2k(64);
        if hi < 0 {
            value - lo
        } else {
            value + lo
        }
    })
}

fn small_int() -> impl Strategy<Value = BigInteger> {
    (-1000i64..1000i64).prop_map(BigInteger::from)
}

fn non_zero_big_int() -> impl Strategy<Value = BigInteger> {
    big_int().prop_filter("non-zero", |b| !b.is_zero())
}

fn std_hash(value: &BigInteger) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn add_associative_with_identity_and_inverse(a in big_int(), b in big_int(), c in big_int()) {
        prop_assert_eq!((&a + &b) + &c, &a + (&b + &c));
        prop_assert_eq!(&a + 0i32, a.clone());
        prop_assert_eq!(&a + (-&a), 0);
    }

    #[test]
    fn mul_ring_laws(a in big_int(), b in big_int(), c in big_int()) {
        prop_assert_eq!(&a * &b, &b * &a);
        prop_assert_eq!(&a * 1i32, a.clone());
        prop_assert_eq!(&a * 0i32, 0);
        prop_assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
    }

    #[test]
    fn truncated_division_identity(a in big_int(), b in non_zero_big_int()) {
        let q = &a / &b;
        let r = &a % &b;
        prop_assert_eq!(&q * &b + &r, a.clone());
        prop_assert!(r.sgn() == 0 || r.sgn() == a.sgn());
        prop_assert!(r.abs() < b.abs());
    }

    #[test]
    fn truncated_division_small(a in small_int(), b in small_int()) {
        prop_assume!(!b.is_zero());
        let (x, y) = (a.to_i64(), b.to_i64());
        prop_assert_eq!(&a / &b, x / y);
        prop_assert_eq!(&a % &b, x % y);
    }

    #[test]
    fn shifts_match_powers_of_two(a in big_int(), k in 0u32..200) {
        let factor = BigInteger::from(2).power(k);
        let mut shifted = a.clone();
        shifted.mul2k(k);
        prop_assert_eq!(&shifted, &(&a * &factor));

        let mut halved = a.clone();
        halved.div2k(k);
        prop_assert_eq!(halved, &a / &factor);
    }

    #[test]
    fn bitwise_identities(a in big_int()) {
        prop_assert_eq!(!&a, -&a - 1i32);
        prop_assert_eq!(&a & &a, a.clone());
        prop_assert_eq!(&a | &a, a.clone());
        prop_assert_eq!(&a ^ &a, 0);
    }

    #[test]
    fn gcd_properties(a in big_int(), b in big_int()) {
        let g = gcd(&a, &b);
        prop_assert!(g.is_nonneg());
        prop_assert_eq!(&g, &gcd(&a.abs(), &b.abs()));
        if !g.is_zero() {
            prop_assert_eq!(&a % &g, 0);
            prop_assert_eq!(&b % &g, 0);
        }
        let ext = gcdext(&a, &b);
        prop_assert_eq!(&ext.gcd, &g);
        prop_assert_eq!(&ext.s * &a + &ext.t * &b, g);
    }

    #[test]
    fn lcm_times_gcd_is_abs_product(a in big_int(), b in big_int()) {
        if a.is_zero() || b.is_zero() {
            prop_assert_eq!(lcm(&a, &b), 0);
        } else {
            prop_assert_eq!(lcm(&a, &b) * gcd(&a, &b), (&a * &b).abs());
        }
    }

    #[test]
    fn root_brackets_value(a in big_int(), k in 1u32..8) {
        let a = a.abs();
        let r = root(&a, k);
        prop_assert!(r.power(k) <= a);
        prop_assert!((&r + 1i32).power(k) > a);
    }

    #[test]
    fn rootrem_reconstructs(a in big_int(), k in 1u32..8) {
        prop_assume!(a.is_nonneg() || k % 2 == 1);
        let (r, rem) = a.rootrem(k);
        prop_assert_eq!(r.power(k) + &rem, a.clone());
        prop_assert!(rem.sgn() == 0 || rem.sgn() == a.sgn());
    }

    #[test]
    fn text_round_trip(a in big_int()) {
        prop_assert_eq!(a.to_string().parse::<BigInteger>().unwrap(), a);
    }

    #[test]
    fn machine_round_trip(x in any::<i64>(), y in any::<u64>(), z in any::<i32>(), w in any::<u32>()) {
        prop_assert_eq!(BigInteger::from(x).to_i64(), x);
        prop_assert_eq!(BigInteger::from(y).to_u64(), y);
        prop_assert_eq!(BigInteger::from(z).to_i32(), z);
        prop_assert_eq!(BigInteger::from(w).to_u32(), w);
    }

    #[test]
    fn ordering_consistent_with_arithmetic(a in big_int(), b in big_int(), c in big_int()) {
        if a < b {
            prop_assert!(&a + &c < &b + &c);
            prop_assert!(-&b < -&a);
        }
        prop_assert_eq!(a.cmp(&b), (&a - &b).sgn().cmp(&0));
    }

    #[test]
    fn copies_are_independent(a in big_int(), b in big_int()) {
        let mut x = a.clone();
        let y = x.clone();
        x += &b;
        x.complement();
        prop_assert_eq!(y, a);
    }

    #[test]
    fn equal_values_hash_equal(a in big_int()) {
        let b: BigInteger = a.to_string().parse().unwrap();
        prop_assert_eq!(a.hash_code(), b.hash_code());
        prop_assert_eq!(std_hash(&a), std_hash(&b));
    }
}
