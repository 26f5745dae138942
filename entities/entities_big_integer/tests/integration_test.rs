//! Integration tests for entities_big_integer crate
//!
//! These tests walk through the documented scenarios end-to-end using only
//! the public API.

use std::cmp::Ordering;

use entities_big_integer::*;

fn big(s: &str) -> BigInteger {
    s.parse().unwrap()
}

#[test]
fn test_large_multiplication_renders_exactly() {
    let a = big("123456789012345678901234567890");
    let product = a * BigInteger::from(2);
    assert_eq!(product.to_string(), "246913578024691357802469135780");
}

#[test]
fn test_truncated_division_and_remainder() {
    assert_eq!(BigInteger::from(7) / BigInteger::from(-2), BigInteger::from(-3));
    assert_eq!(BigInteger::from(7) % BigInteger::from(-2), BigInteger::from(1));
    assert_eq!(BigInteger::from(-7) / BigInteger::from(2), BigInteger::from(-3));
    assert_eq!(BigInteger::from(-7) % BigInteger::from(2), BigInteger::from(-1));
}

#[test]
fn test_two_complement_bitwise() {
    assert_eq!(!BigInteger::new(), BigInteger::from(-1));
    assert_eq!(BigInteger::from(-1) & BigInteger::from(5), BigInteger::from(5));
    assert_eq!(BigInteger::from(-4) | BigInteger::from(1), BigInteger::from(-3));
}

#[test]
fn test_gcdext_scenario() {
    let a = BigInteger::from(240);
    let b = BigInteger::from(46);
    let result = gcdext(&a, &b);
    assert_eq!(result.gcd, BigInteger::from(2));
    assert_eq!(&a * &result.s + &b * &result.t, BigInteger::from(2));
}

#[test]
fn test_power_of_two_scaling() {
    let mut x = BigInteger::from(-3);
    x.mul2k(4);
    assert_eq!(x, BigInteger::from(-48));

    let mut y = BigInteger::from(-17);
    y.div2k(2);
    assert_eq!(y, BigInteger::from(-4));
}

#[test]
fn test_powers_and_roots() {
    assert_eq!(BigInteger::new().power(0), BigInteger::from(1));
    assert_eq!(root(&BigInteger::from(1_000_000_000), 3), BigInteger::from(1000));
    assert_eq!(
        rootrem(&BigInteger::from(1_000_000_001), 3),
        (BigInteger::from(1000), BigInteger::from(1))
    );
}

#[test]
fn test_parse_failures_surface_to_caller() {
    assert_eq!("".parse::<BigInteger>(), Err(ParseBigIntegerError::Empty));
    assert!(matches!(
        "12x".parse::<BigInteger>(),
        Err(ParseBigIntegerError::InvalidDigit { position: 2, found: 'x' })
    ));
    assert!("+12".parse::<BigInteger>().is_err());
    assert!(" 12".parse::<BigInteger>().is_err());
}

#[test]
#[should_panic(expected = "divisor is zero")]
fn test_division_by_zero_fails_fast() {
    let _ = big("123456789012345678901234567890") / BigInteger::new();
}

#[test]
#[should_panic(expected = "to_i64")]
fn test_out_of_range_conversion_fails_fast() {
    big("9223372036854775808").to_i64();
}

#[test]
#[should_panic(expected = "even root")]
fn test_even_root_of_negative_fails_fast() {
    rootrem(&BigInteger::from(-16), 4);
}

#[test]
fn test_conversion_boundaries() {
    let max = BigInteger::from(i64::MAX);
    assert!(max.fits_i64());
    assert!(max.fits_u64());
    assert!(!max.fits_i32());
    assert_eq!(max.to_i64(), i64::MAX);

    let past_max = &max + 1i32;
    assert!(!past_max.fits_i64());
    assert_eq!(past_max.try_to_i64(), None);
    assert_eq!(past_max.to_u64(), 1u64 << 63);
}

#[test]
fn test_mixed_comparisons() {
    let x = big("-18446744073709551616");
    assert!(x < i64::MIN);
    assert_eq!(x.compare_i64(0), Ordering::Less);
    assert_eq!((-&x).compare_u64(u64::MAX), Ordering::Greater);
    assert!(BigInteger::from(3) == 3u32);
}

#[test]
fn test_fused_operations_match_separate_steps() {
    let a = big("99999999999999999999");
    let b = big("-88888888888888888888");
    let mut x = BigInteger::from(17);
    x.add_mul(&a, &b);
    assert_eq!(x, BigInteger::from(17) + &a * &b);
    x.sub_mul(&a, &b);
    assert_eq!(x, BigInteger::from(17));
}

#[test]
fn test_value_semantics() {
    let mut a = big("1000000000000000000000");
    let b = a.clone();
    a.neg_assign();
    a.complement();
    assert_eq!(b, big("1000000000000000000000"));

    let mut c = BigInteger::from(5);
    a.swap(&mut c);
    assert_eq!(a, BigInteger::from(5));
    assert_eq!(c, big("999999999999999999999"));

    let moved = c.take();
    assert!(c.is_zero());
    assert_eq!(moved, big("999999999999999999999"));
}

#[test]
fn test_number_theory_helpers() {
    let a = big("1000000000000000000000");
    let b = big("15000000000");
    assert_eq!(gcd(&a, &b), big("5000000000"));
    assert_eq!(lcm(&a, &b), big("3000000000000000000000"));
    assert_eq!(lcm(&a, &BigInteger::new()), BigInteger::new());
}

#[test]
fn test_bit_inspection() {
    let x = BigInteger::from(1) << 70;
    assert!(x.is_power_of_two());
    assert_eq!(x.power_of_two_shift(), Some(70));
    assert_eq!(x.log2(), 70);
    assert_eq!((-&x).mlog2(), 70);
    assert_eq!((-&x).log2(), 0);
    assert!(x.perfect_square());
    assert!(!(&x * 2i32).perfect_square());
}
