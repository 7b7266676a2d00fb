//! # BigInt
//! Immutable arbitrary-precision signed integers stored as base `10^9` limbs,
//! least-significant limb first.
//! # Example
//! ```
//! use dec_bigint::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "900000000000".parse().unwrap();
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::error::{BigIntError, Result};

/// Implements the owned and mixed-reference variants of a binary operator,
/// plus its compound assignment, on top of the `&BigInt op &BigInt` impl.
macro_rules! forward_binop {
    (impl $imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident) => {
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                (&self).$method(&rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                (&self).$method(rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                self.$method(&rhs)
            }
        }

        impl $imp_assign<BigInt> for BigInt {
            fn $method_assign(&mut self, rhs: BigInt) {
                *self = (&*self).$method(&rhs);
            }
        }

        impl $imp_assign<&BigInt> for BigInt {
            fn $method_assign(&mut self, rhs: &BigInt) {
                *self = (&*self).$method(rhs);
            }
        }
    };
}

/// Same as `forward_binop`, for operators whose right-hand side is an `i32` scalar.
macro_rules! forward_scalar_binop {
    (impl $imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident) => {
        impl $imp<i32> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: i32) -> BigInt {
                (&self).$method(rhs)
            }
        }

        impl $imp_assign<i32> for BigInt {
            fn $method_assign(&mut self, rhs: i32) {
                *self = (&*self).$method(rhs);
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Positive,
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Positive => Sign::Negative,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Sign {
        if self == rhs {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Invariants: no limb reaches `BASE`, the most-significant limb is never
/// zero, and an empty limb vector always carries `Sign::Positive`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    limbs: Vec<u32>,
}

// 实现构造
impl BigInt {
    /// Builds a value from raw limbs, restoring the canonical form.
    pub(crate) fn from_raw(limbs: Vec<u32>, sign: Sign) -> BigInt {
        let mut val = BigInt { sign, limbs };
        val.trim();
        val
    }

    fn trim(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
        if self.limbs.is_empty() {
            self.sign = Sign::Positive;
        }
    }

    pub fn zero() -> BigInt {
        BigInt { sign: Sign::Positive, limbs: Vec::new() }
    }

    pub fn one() -> BigInt {
        POS_CACHE[1].clone()
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> i8 {
        match (self.is_zero(), self.sign) {
            (true, _) => 0,
            (false, Sign::Positive) => 1,
            (false, Sign::Negative) => -1,
        }
    }

    /// Base `10^9` limbs, least-significant first.
    pub fn limbs(&self) -> &[u32] {
        &self.limbs
    }

    pub fn abs(&self) -> BigInt {
        BigInt { sign: Sign::Positive, limbs: self.limbs.clone() }
    }

    pub(crate) fn is_odd(&self) -> bool {
        // BASE is even, so parity is decided by the lowest limb
        self.limbs.first().map_or(false, |l| l & 1 == 1)
    }

    fn value_of(mut val: u128, sign: Sign) -> BigInt {
        if val <= MAX_CONSTANT as u128 {
            return match sign {
                Sign::Positive => POS_CACHE[val as usize].clone(),
                Sign::Negative => NEG_CACHE[val as usize].clone(),
            };
        }
        let mut limbs = Vec::with_capacity(5);
        while val > 0 {
            limbs.push((val % BASE as u128) as u32);
            val /= BASE as u128;
        }
        BigInt { sign, limbs }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

macro_rules! impl_unsigned_to_big_num {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u128, Sign::Positive)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_num {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            let sign = if val < 0 { Sign::Negative } else { Sign::Positive };
            BigInt::value_of(val.unsigned_abs() as u128, sign)
        }
    }
    )*
    };
}
impl_unsigned_to_big_num!(u8, u16, u32, usize, u64, u128);
impl_signed_to_big_num!(i8, i16, i32, isize, i64, i128);

// 窄化转换
impl TryFrom<&BigInt> for i64 {
    type Error = BigIntError;

    fn try_from(val: &BigInt) -> Result<i64> {
        let overflow = BigIntError::Overflow { target: "i64" };
        // i64::MAX has 19 decimal digits, three limbs always suffice
        if val.limbs.len() > 3 {
            return Err(overflow);
        }
        let mag = val
            .limbs
            .iter()
            .rev()
            .fold(0_i128, |acc, &l| acc * BASE as i128 + l as i128);
        let signed = if val.is_negative() { -mag } else { mag };
        i64::try_from(signed).map_err(|_| overflow)
    }
}

impl TryFrom<BigInt> for i64 {
    type Error = BigIntError;

    fn try_from(val: BigInt) -> Result<i64> {
        i64::try_from(&val)
    }
}

impl BigInt {
    /// Checked narrowing, fails with [`BigIntError::Overflow`] outside the `i64` range.
    pub fn to_i64(&self) -> Result<i64> {
        i64::try_from(self)
    }
}

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = String::with_capacity(self.limbs.len() * BASE_DIGITS);
        match self.limbs.split_last() {
            None => digits.push('0'),
            Some((top, rest)) => {
                digits.push_str(&top.to_string());
                for limb in rest.iter().rev() {
                    digits.push_str(&format!("{:0width$}", limb, width = BASE_DIGITS));
                }
            }
        }
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

// 实现解析
impl FromStr for BigInt {
    type Err = BigIntError;

    /// Accepts a run of `+`/`-` (every `-` flips the sign) followed by at least one digit.
    fn from_str(val: &str) -> Result<BigInt> {
        let bytes = val.as_bytes();
        let mut sign = Sign::Positive;
        let mut cursor = 0;
        while cursor < bytes.len() && (bytes[cursor] == b'-' || bytes[cursor] == b'+') {
            if bytes[cursor] == b'-' {
                sign = -sign;
            }
            cursor += 1;
        }

        let digits = &bytes[cursor..];
        if digits.is_empty() {
            return Err(BigIntError::EmptyLiteral);
        }
        if digits.len() > MAX_DECIMAL_DIGITS {
            return Err(BigIntError::LiteralTooLong {
                digits: digits.len(),
                limit: MAX_DECIMAL_DIGITS,
            });
        }
        if let Some(offset) = digits.iter().position(|b| !b.is_ascii_digit()) {
            // everything before `position` is ASCII, so it is a char boundary
            let position = cursor + offset;
            let found = val[position..].chars().next().unwrap_or('\u{fffd}');
            return Err(BigIntError::InvalidDigit { found, position });
        }

        let limbs = digits
            .rchunks(BASE_DIGITS)
            .map(|group| group.iter().fold(0_u32, |acc, d| acc * 10 + (d - b'0') as u32))
            .collect();
        Ok(BigInt::from_raw(limbs, sign))
    }
}

impl TryFrom<&str> for BigInt {
    type Error = BigIntError;

    fn try_from(val: &str) -> Result<BigInt> {
        val.parse()
    }
}

// 实现大小比较
pub(crate) fn compare_mag(a: &[u32], b: &[u32]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Positive, Sign::Positive) => compare_mag(&self.limbs, &other.limbs),
            (Sign::Negative, Sign::Negative) => compare_mag(&self.limbs, &other.limbs).reverse(),
        }
    }
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        if !self.is_zero() {
            self.sign = -self.sign;
        }
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.clone().neg()
    }
}

// 实现加法
pub(crate) fn add_mag(x: &[u32], y: &[u32]) -> Vec<u32> {
    let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };
    let mut result = Vec::with_capacity(long.len() + 1);
    let mut carry = 0;
    for (i, &l) in long.iter().enumerate() {
        let mut sum = l + short.get(i).copied().unwrap_or(0) + carry;
        carry = (sum >= BASE) as u32;
        if carry == 1 {
            sum -= BASE;
        }
        result.push(sum);
    }
    if carry == 1 {
        result.push(1);
    }
    result
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        if rhs.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return rhs.clone();
        }
        if self.sign == rhs.sign {
            BigInt { sign: self.sign, limbs: add_mag(&self.limbs, &rhs.limbs) }
        } else {
            self - &(-rhs)
        }
    }
}

forward_binop!(impl Add, add, AddAssign, add_assign);

// 实现减法
/// `big - little`, trimmed. Requires `|big| >= |little|`.
pub(crate) fn sub_mag(big: &[u32], little: &[u32]) -> Vec<u32> {
    let mut result = Vec::with_capacity(big.len());
    let mut borrow = 0_i64;
    for (i, &b) in big.iter().enumerate() {
        let mut diff = b as i64 - little.get(i).copied().unwrap_or(0) as i64 - borrow;
        borrow = (diff < 0) as i64;
        if borrow == 1 {
            diff += BASE as i64;
        }
        result.push(diff as u32);
    }
    debug_assert_eq!(borrow, 0, "sub_mag called with |big| < |little|");
    while result.last() == Some(&0) {
        result.pop();
    }
    result
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        if rhs.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return -rhs;
        }
        if self.sign != rhs.sign {
            return self + &(-rhs);
        }
        match compare_mag(&self.limbs, &rhs.limbs) {
            Ordering::Less => -(rhs - self),
            _ => BigInt::from_raw(sub_mag(&self.limbs, &rhs.limbs), self.sign),
        }
    }
}

forward_binop!(impl Sub, sub, SubAssign, sub_assign);

#[cfg(test)]
pub(crate) fn big(s: &str) -> BigInt {
    s.parse().expect("test literal")
}

#[test]
fn test_from() {
    assert_eq!(BigInt::from(12_i8).to_string(), "12");
    assert_eq!(BigInt::from(-100_i16).to_string(), "-100");
    assert_eq!(BigInt::from(0_i32), BigInt::zero());
    assert_eq!(BigInt::from(1_000_000_000_u32).limbs(), &[0, 1]);
    assert_eq!(BigInt::from(i64::MIN).to_string(), "-9223372036854775808");
    assert_eq!(BigInt::from(u64::MAX).to_string(), "18446744073709551615");
    assert_eq!(BigInt::from(-5_isize), big("-5"));
}

#[test]
fn test_parse() {
    let a = big("123456789123456789");
    assert_eq!(a.limbs(), &[123456789, 123456789]);
    assert_eq!(big("-0"), BigInt::zero());
    assert!(!big("-0").is_negative());
    assert_eq!(big("000000000000000000042"), BigInt::from(42));
    assert_eq!(big("--7"), BigInt::from(7));
    assert_eq!(big("+-+7"), BigInt::from(-7));
    assert_eq!(big("1000000000").limbs(), &[0, 1]);
}

#[test]
fn test_parse_rejects_malformed() {
    assert_eq!("".parse::<BigInt>(), Err(BigIntError::EmptyLiteral));
    assert_eq!("-".parse::<BigInt>(), Err(BigIntError::EmptyLiteral));
    assert_eq!(
        "12a4".parse::<BigInt>(),
        Err(BigIntError::InvalidDigit { found: 'a', position: 2 })
    );
    assert_eq!(
        "-1.5".parse::<BigInt>(),
        Err(BigIntError::InvalidDigit { found: '.', position: 2 })
    );
    assert_eq!(
        " 1".parse::<BigInt>(),
        Err(BigIntError::InvalidDigit { found: ' ', position: 0 })
    );
    assert_eq!(
        "1-2".parse::<BigInt>(),
        Err(BigIntError::InvalidDigit { found: '-', position: 1 })
    );
    assert_eq!(
        "7é".parse::<BigInt>(),
        Err(BigIntError::InvalidDigit { found: 'é', position: 1 })
    );
    assert!(BigInt::try_from("x").unwrap_err().is_format_error());
}

#[test]
fn test_parse_length_limit() {
    let too_long = "1".repeat(MAX_DECIMAL_DIGITS + 1);
    let err = too_long.parse::<BigInt>().unwrap_err();
    assert_eq!(
        err,
        BigIntError::LiteralTooLong { digits: MAX_DECIMAL_DIGITS + 1, limit: MAX_DECIMAL_DIGITS }
    );
    assert!(err.is_format_error());

    // signs do not count toward the limit
    let longest = format!("-{}", "9".repeat(MAX_DECIMAL_DIGITS));
    let val: BigInt = longest.parse().unwrap();
    assert!(val.is_negative());
    assert_eq!(val.limbs().len(), (MAX_DECIMAL_DIGITS + BASE_DIGITS - 1) / BASE_DIGITS);
    assert_eq!(val.to_string(), longest);
}

#[test]
fn test_to_string() {
    assert_eq!(BigInt::zero().to_string(), "0");
    assert_eq!(big("-1000000000000000000").to_string(), "-1000000000000000000");
    assert_eq!(big("1000000001").to_string(), "1000000001");
    let s = "12345678909876523784950683472613487560983287654321";
    assert_eq!(big(s).to_string(), s);
    assert_eq!(format!("{:>6}", BigInt::from(-42)), "   -42");
    assert_eq!(format!("{:+}", BigInt::from(42)), "+42");
}

#[test]
fn test_round_trip() {
    for s in ["0", "-1", "999999999", "-1000000000", "100000000000000000000000000001"] {
        assert_eq!(big(s).to_string().parse::<BigInt>(), Ok(big(s)));
    }
}

#[test]
fn test_compare() {
    let values: Vec<BigInt> = [
        "-1000000000000", "-999999999", "-2", "0", "3", "999999999", "1000000000", "1000000000000",
    ]
    .iter()
    .map(|s| big(s))
    .collect();
    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(a.cmp(b), i.cmp(&j), "{} vs {}", a, b);
        }
    }
    assert!(big("-5") < big("-4"));
    assert!(big("1000000000") > big("999999999"));
    assert!(big("7") <= big("7") && big("7") >= big("7") && big("7") != big("8"));
}

#[test]
fn test_add() {
    assert_eq!(
        big("123456789123456789") + big("876543210876543211"),
        big("1000000000000000000")
    );
    assert_eq!(big("999999999") + big("1"), big("1000000000"));
    assert_eq!(big("-5") + big("3"), big("-2"));
    assert_eq!(big("5") + big("-5"), BigInt::zero());
    assert_eq!(big("-5") + BigInt::zero(), big("-5"));
    assert_eq!(BigInt::zero() + big("-5"), big("-5"));
    let mut acc = BigInt::zero();
    acc += big("999999999999999999");
    acc += &big("1");
    assert_eq!(acc, big("1000000000000000000"));
}

#[test]
fn test_sub() {
    assert_eq!(big("1000000000000000000") - big("1"), big("999999999999999999"));
    assert_eq!(big("3") - big("5"), big("-2"));
    assert_eq!(big("-3") - big("-5"), big("2"));
    assert_eq!(big("-3") - big("5"), big("-8"));
    assert_eq!(BigInt::zero() - big("5"), big("-5"));
    let x = big("123456789012345678901234567890");
    assert_eq!(&x - &x, BigInt::zero());
    assert!(!(&x - &x).is_negative());
    let mut y = x.clone();
    y -= big("123456789012345678901234567891");
    assert_eq!(y, big("-1"));
}

#[test]
fn test_to_i64() {
    assert_eq!(big("123456789110").to_i64(), Ok(123456789110));
    assert_eq!(big("-9223372036854775808").to_i64(), Ok(i64::MIN));
    assert_eq!(big("9223372036854775807").to_i64(), Ok(i64::MAX));
    assert_eq!(
        big("9223372036854775808").to_i64(),
        Err(BigIntError::Overflow { target: "i64" })
    );
    assert!(big("-1000000000000000000000000000").to_i64().is_err());
}

#[test]
fn test_signum_and_abs() {
    assert_eq!(big("-12").signum(), -1);
    assert_eq!(BigInt::zero().signum(), 0);
    assert_eq!(big("-12").abs(), big("12"));
    assert_eq!(-BigInt::zero(), BigInt::zero());
    assert_eq!(-big("12"), big("-12"));
}

#[test]
fn test_add_laws_and_order() {
    use crate::big_int_mul::random_big;
    use rand::SeedableRng;

    let mut rng = rand::rngs::StdRng::seed_from_u64(3);
    let zero = BigInt::zero();
    for &(la, lb, lc) in &[(1, 1, 1), (3, 5, 2), (12, 12, 12), (30, 2, 17)] {
        let a = random_big(&mut rng, la);
        let b = random_big(&mut rng, lb);
        let c = random_big(&mut rng, lc);
        assert_eq!(&a + &zero, a);
        assert_eq!(&a + &(-&a), zero);
        assert_eq!(&a + &b, &b + &a);
        assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        assert_eq!(&(&a - &b) + &b, a);
        assert_eq!(a.to_string().parse::<BigInt>(), Ok(a.clone()));

        let (x, y) = (a.cmp(&b), b.cmp(&c));
        if x == y && x != Ordering::Equal {
            assert_eq!(a.cmp(&c), x);
        }
        assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }
}
