// 实现除法与求余
use std::cmp::Ordering;
use std::ops::{Div, DivAssign, Rem, RemAssign};

use log::{debug, trace};

use crate::big_int::{compare_mag, sub_mag};
use crate::big_int_mul::mul_small_mag;
use crate::big_num_constants::*;
use crate::error::{BigIntError, Result};
use crate::BigInt;

/// Single pass, most-significant limb first, carrying the remainder down.
/// `v` must be nonzero and below `2^32`.
pub(crate) fn div_small_mag(x: &[u32], v: u64) -> (Vec<u32>, u64) {
    let mut quotient = vec![0_u32; x.len()];
    let mut rem: u64 = 0;
    for (q, &limb) in quotient.iter_mut().zip(x).rev() {
        let cur = limb as u64 + rem * BASE as u64;
        *q = (cur / v) as u32;
        rem = cur % v;
    }
    while quotient.last() == Some(&0) {
        quotient.pop();
    }
    (quotient, rem)
}

/// D3: estimates the next quotient digit of `r / b` from the top two limbs
/// of `r` and the top limb of the normalized divisor `b`. Never below the true
/// digit, and at most two above it.
fn trial_digit(r: &[u32], b: &[u32]) -> u64 {
    let n = b.len();
    let s1 = r.get(n).copied().unwrap_or(0) as u64;
    let s2 = r.get(n - 1).copied().unwrap_or(0) as u64;
    ((s1 * BASE as u64 + s2) / b[n - 1] as u64).min(BASE as u64 - 1)
}

/// Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1 Algorithm D, in base `10^9`.
/// Requires `b.len() >= 2` and `|a| >= |b|`.
fn div_mod_knuth(a: &[u32], b: &[u32]) -> (Vec<u32>, Vec<u32>) {
    // D1 normalize: top limb of the divisor ends up close to BASE / 2 or above,
    // which keeps every trial digit within two of the true one
    let norm = BASE as u64 / (b[b.len() - 1] as u64 + 1);
    let a = mul_small_mag(a, norm);
    let b = mul_small_mag(b, norm);
    trace!("knuth division: {} by {} limbs, norm = {}", a.len(), b.len(), norm);

    let mut q = vec![0_u32; a.len()];
    let mut r: Vec<u32> = Vec::with_capacity(b.len() + 1);
    for i in (0..a.len()).rev() {
        // r = r * BASE + a[i]
        r.insert(0, a[i]);
        while r.last() == Some(&0) {
            r.pop();
        }

        let mut d = trial_digit(&r, &b);

        // D4..D6 multiply, then step back while the product overshoots r
        let mut product = mul_small_mag(&b, d);
        let mut corrections = 0;
        while compare_mag(&r, &product) == Ordering::Less {
            product = sub_mag(&product, &b);
            d -= 1;
            corrections += 1;
        }
        if corrections > 1 {
            debug!("trial digit at limb {} needed {} corrections", i, corrections);
        }
        r = sub_mag(&r, &product);
        q[i] = d as u32;
    }

    while q.last() == Some(&0) {
        q.pop();
    }
    // D8 unnormalize
    let (r, _) = div_small_mag(&r, norm);
    (q, r)
}

impl BigInt {
    /// Truncating division. The quotient's sign is the product of the operand
    /// signs, the remainder takes the dividend's sign.
    pub fn div_mod(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        if divisor.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        let q_sign = self.sign() * divisor.sign();
        let r_sign = self.sign();
        let (q, r) = if compare_mag(self.limbs(), divisor.limbs()) == Ordering::Less {
            (Vec::new(), self.limbs().to_vec())
        } else if divisor.limbs().len() == 1 {
            let (q, r) = div_small_mag(self.limbs(), divisor.limbs()[0] as u64);
            (q, vec![r as u32])
        } else {
            div_mod_knuth(self.limbs(), divisor.limbs())
        };
        Ok((BigInt::from_raw(q, q_sign), BigInt::from_raw(r, r_sign)))
    }

    pub fn checked_div(&self, divisor: &BigInt) -> Result<BigInt> {
        self.div_mod(divisor).map(|(q, _)| q)
    }

    pub fn checked_rem(&self, divisor: &BigInt) -> Result<BigInt> {
        self.div_mod(divisor).map(|(_, r)| r)
    }

    /// Divides by a native scalar, truncating toward zero.
    pub fn div_small(&self, v: i32) -> Result<BigInt> {
        if v == 0 {
            return Err(BigIntError::DivisionByZero);
        }
        let sign = if v < 0 { -self.sign() } else { self.sign() };
        let (q, _) = div_small_mag(self.limbs(), v.unsigned_abs() as u64);
        Ok(BigInt::from_raw(q, sign))
    }

    /// Remainder by a native scalar; carries the dividend's sign.
    pub fn rem_small(&self, v: i32) -> Result<i32> {
        if v == 0 {
            return Err(BigIntError::DivisionByZero);
        }
        let (_, rem) = div_small_mag(self.limbs(), v.unsigned_abs() as u64);
        let rem = if self.is_negative() { -(rem as i64) } else { rem as i64 };
        Ok(rem as i32)
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Panics with [`BigIntError::DivisionByZero`] on a zero divisor; see [`BigInt::checked_div`].
    fn div(self, rhs: &BigInt) -> BigInt {
        self.checked_div(rhs).unwrap_or_else(|e| panic!("{}", e))
    }
}

forward_binop!(impl Div, div, DivAssign, div_assign);

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: &BigInt) -> BigInt {
        self.checked_rem(rhs).unwrap_or_else(|e| panic!("{}", e))
    }
}

forward_binop!(impl Rem, rem, RemAssign, rem_assign);

impl Div<i32> for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: i32) -> BigInt {
        self.div_small(rhs).unwrap_or_else(|e| panic!("{}", e))
    }
}

forward_scalar_binop!(impl Div, div, DivAssign, div_assign);

impl Rem<i32> for &BigInt {
    type Output = i32;

    fn rem(self, rhs: i32) -> i32 {
        self.rem_small(rhs).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl Rem<i32> for BigInt {
    type Output = i32;

    fn rem(self, rhs: i32) -> i32 {
        (&self).rem(rhs)
    }
}

#[cfg(test)]
use crate::big_int::big;

#[test]
fn test_div() {
    let (q, r) = big("1000000000").div_mod(&big("3")).unwrap();
    assert_eq!(q, big("333333333"));
    assert_eq!(r, big("1"));

    assert_eq!(big("120") / big("13"), big("9"));
    // divide one word
    let a = big("10000000000000000000000000000000000");
    assert_eq!(a / big("1000"), big("10000000000000000000000000000000"));
    // divide Knuth
    let a = big("124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287094780219747214567876543245678976547897654367543567654678987654321456789087654325678908765432567890876543245678908765432567890876543876543245678907654356789");
    let b = big("5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376");
    let c = big("21988300642263136800048566126805476040703295625345756336585704044222781621158596876349726562910906651562104831721609088222205401883168960593370061500432215");
    assert_eq!(a / b, c);
}

#[test]
fn test_mod() {
    assert_eq!(big("12") % big("8"), big("4"));
    assert_eq!(big("10000000000000000") % big("10"), BigInt::zero());
    let a = big("23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245");
    let b = big("526738495607659438721653478560954837265378495607");
    let r = big("393707270751296419349581795408095683999332705291");
    assert_eq!(a % b, r);
}

#[test]
fn test_div_signs() {
    let cases = [
        ("7", "2", "3", "1"),
        ("-7", "2", "-3", "-1"),
        ("7", "-2", "-3", "1"),
        ("-7", "-2", "3", "-1"),
        ("-6", "3", "-2", "0"),
        ("3", "-5000000000000", "0", "3"),
    ];
    for (a, b, q, r) in cases {
        let (qq, rr) = big(a).div_mod(&big(b)).unwrap();
        assert_eq!((qq.to_string(), rr.to_string()), (q.to_string(), r.to_string()), "{} / {}", a, b);
    }
    assert!(!(big("-6") % big("3")).is_negative());
}

#[test]
fn test_div_by_zero() {
    assert_eq!(big("5").div_mod(&BigInt::zero()), Err(BigIntError::DivisionByZero));
    assert_eq!(BigInt::zero().checked_div(&BigInt::zero()), Err(BigIntError::DivisionByZero));
    assert_eq!(big("5").div_small(0), Err(BigIntError::DivisionByZero));
    assert_eq!(big("5").rem_small(0), Err(BigIntError::DivisionByZero));
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_div_operator_panics_on_zero() {
    let _ = big("5") / BigInt::zero();
}

#[test]
fn test_div_small() {
    assert_eq!(big("1000000000000000000") / 7, big("142857142857142857"));
    assert_eq!(big("-1000000000000000000") / 7, big("-142857142857142857"));
    assert_eq!(big("1000000000000000000") % 7, 1);
    assert_eq!(big("-1000000000000000000") % 7, -1);
    assert_eq!(big("-1000000000000000000") % -7, -1);
    assert_eq!(big("99999999999999999999") % i32::MIN, 1661992959);
    assert_eq!(big("6") / -3, big("-2"));
    let mut a = big("123456789123456789");
    a /= 1000;
    assert_eq!(a, big("123456789123456"));
}

#[test]
fn test_knuth_needs_correction() {
    // already normalized: norm = BASE / (500000000 + 1) == 1
    let b = big("500000000999999999");
    let r = big("500000000000000000000000000");
    assert_eq!(BASE / (b.limbs()[1] + 1), 1);
    // the top limbs alone suggest BASE - 1, one more than the true digit
    assert_eq!(trial_digit(r.limbs(), b.limbs()), 999999999);
    let (q, rem) = r.div_mod(&b).unwrap();
    assert_eq!(q, big("999999998"));
    assert_eq!(rem, big("2999999998"));

    let a = big("999999999999999999999999999999999999");
    let b = big("500000000000000001");
    let (q, r) = a.div_mod(&b).unwrap();
    assert_eq!(&(&q * &b) + &r, a);
    assert!(r < b);
}

#[test]
fn test_div_mod_law() {
    use crate::big_int_mul::random_big;
    use rand::SeedableRng;

    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    for &(la, lb) in &[(1, 1), (5, 1), (5, 2), (12, 3), (40, 25), (80, 79), (3, 9), (100, 50)] {
        let a = random_big(&mut rng, la);
        let d = random_big(&mut rng, lb);
        let (q, r) = a.div_mod(&d).unwrap();
        assert_eq!(&(&q * &d) + &r, a, "{} / {}", a, d);
        assert!(r.abs() < d.abs());
        assert!(r.is_zero() || r.is_negative() == a.is_negative());
    }
}
