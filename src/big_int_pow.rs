// 实现幂运算, gcd 与 lcm
use crate::big_int_div::div_small_mag;
use crate::math::NativeInt;
use crate::BigInt;

impl BigInt {
    /// Binary exponentiation by a native exponent of any width.
    /// Exponents `<= 0` yield 1.
    pub fn pow<E: NativeInt>(&self, exp: E) -> BigInt {
        let mut result = BigInt::one();
        let mut base = self.clone();
        let mut exp = exp;
        while exp.is_positive() {
            if exp.is_odd() {
                result *= &base;
            }
            exp = exp.halve();
            if exp.is_positive() {
                base = &base * &base;
            }
        }
        result
    }

    /// Binary exponentiation by a big exponent. Exponents `<= 0` yield 1.
    ///
    /// The result is not size-checked: it has roughly `digits(self) * exp`
    /// digits, so callers taking exponents from untrusted input should bound
    /// them first.
    pub fn pow_big(&self, exp: &BigInt) -> BigInt {
        let mut result = BigInt::one();
        let mut base = self.clone();
        let mut exp = exp.clone();
        while exp > BigInt::zero() {
            if exp.is_odd() {
                result *= &base;
            }
            exp = BigInt::from_raw(div_small_mag(exp.limbs(), 2).0, exp.sign());
            if !exp.is_zero() {
                base = &base * &base;
            }
        }
        result
    }

    /// Greatest common divisor, always non-negative. `gcd(0, 0) == 0`.
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        let mut a = self.abs();
        let mut b = other.abs();
        while !b.is_zero() {
            let r = &a % &b;
            a = std::mem::replace(&mut b, r);
        }
        a
    }

    /// Least common multiple, always non-negative. Zero when either side is zero.
    pub fn lcm(&self, other: &BigInt) -> BigInt {
        if self.is_zero() || other.is_zero() {
            return BigInt::zero();
        }
        let g = self.gcd(other);
        (&self.abs() / &g) * other.abs()
    }
}

#[cfg(test)]
use crate::big_int::big;

#[test]
fn test_pow() {
    assert_eq!(big("2").pow(64), big("18446744073709551616"));
    assert_eq!(big("2").pow(64_u8), big("18446744073709551616"));
    assert_eq!(big("-3").pow(5_i64), big("-243"));
    assert_eq!(big("-3").pow(4_usize), big("81"));
    assert_eq!(big("12345").pow(0), BigInt::one());
    assert_eq!(BigInt::zero().pow(0), BigInt::one());
    assert_eq!(BigInt::zero().pow(3), BigInt::zero());
    assert_eq!(big("7").pow(-2), BigInt::one());
    assert_eq!(big("10").pow(100_u32).to_string(), format!("1{}", "0".repeat(100)));
}

#[test]
fn test_pow_recurrence() {
    let a = big("-987654321987");
    assert_eq!(a.pow(1), a);
    let mut prev = BigInt::one();
    for n in 1..=12_i32 {
        let cur = a.pow(n);
        assert_eq!(cur, &a * &prev);
        prev = cur;
    }
}

#[test]
fn test_pow_big() {
    assert_eq!(big("2").pow_big(&big("64")), big("18446744073709551616"));
    assert_eq!(big("-1").pow_big(&big("1000000001")), big("-1"));
    assert_eq!(big("-1").pow_big(&big("1000000000000000000")), BigInt::one());
    assert_eq!(big("5").pow_big(&BigInt::zero()), BigInt::one());
    assert_eq!(big("5").pow_big(&big("-3")), BigInt::one());
    assert_eq!(big("13").pow_big(&big("37")), big("13").pow(37));
}

#[test]
fn test_gcd_lcm() {
    assert_eq!(big("12").gcd(&big("18")), big("6"));
    assert_eq!(big("-12").gcd(&big("18")), big("6"));
    assert_eq!(big("0").gcd(&big("-7")), big("7"));
    assert_eq!(BigInt::zero().gcd(&BigInt::zero()), BigInt::zero());
    assert_eq!(big("4").lcm(&big("6")), big("12"));
    assert_eq!(big("-4").lcm(&big("6")), big("12"));
    assert_eq!(big("4").lcm(&BigInt::zero()), BigInt::zero());

    let a = big("2").pow(100) * big("3").pow(20);
    let b = big("2").pow(40) * big("5").pow(30);
    assert_eq!(a.gcd(&b), big("2").pow(40));
}

#[test]
fn test_gcd_lcm_product() {
    use crate::big_int_mul::random_big;
    use rand::SeedableRng;

    let mut rng = rand::rngs::StdRng::seed_from_u64(99);
    for &(la, lb) in &[(1, 1), (3, 2), (10, 10), (25, 4)] {
        let a = random_big(&mut rng, la);
        let b = random_big(&mut rng, lb);
        assert_eq!(&a.gcd(&b) * &a.lcm(&b), (&a * &b).abs());
    }
}
