// 实现乘法
use std::ops::{Mul, MulAssign};

use log::trace;

use crate::big_num_constants::*;
use crate::BigInt;

/// Multiplies a magnitude by a single word. `v` must stay below `2^32`.
pub(crate) fn mul_small_mag(x: &[u32], v: u64) -> Vec<u32> {
    if v == 0 {
        return Vec::new();
    }
    let mut result = Vec::with_capacity(x.len() + 2);
    let mut carry: u64 = 0;
    for &limb in x {
        let product = limb as u64 * v + carry;
        result.push((product % BASE as u64) as u32);
        carry = product / BASE as u64;
    }
    while carry > 0 {
        result.push((carry % BASE as u64) as u32);
        carry /= BASE as u64;
    }
    while result.last() == Some(&0) {
        result.pop();
    }
    result
}

/// Regroups little-endian decimal digit groups of `old_digits` digits each
/// into groups of `new_digits` digits, dropping leading zero groups.
pub(crate) fn convert_base(digits: &[u32], old_digits: usize, new_digits: usize) -> Vec<u32> {
    debug_assert!(old_digits < POW10.len() && new_digits < POW10.len());
    let new_radix = POW10[new_digits];
    let mut result = Vec::with_capacity(digits.len() * old_digits / new_digits + 1);
    let mut cur: u64 = 0;
    let mut cur_digits = 0;
    for &d in digits {
        cur += d as u64 * POW10[cur_digits];
        cur_digits += old_digits;
        while cur_digits >= new_digits {
            result.push((cur % new_radix) as u32);
            cur /= new_radix;
            cur_digits -= new_digits;
        }
    }
    result.push(cur as u32);
    while result.last() == Some(&0) {
        result.pop();
    }
    result
}

/// Karatsuba convolution of two equal, power-of-two length digit vectors.
/// The result has `2 * n` coefficients and no carries applied.
fn karatsuba(a: &[i128], b: &[i128]) -> Vec<i128> {
    let n = a.len();
    debug_assert_eq!(n, b.len());
    let mut res = vec![0_i128; n + n];
    if n <= KARATSUBA_THRESHOLD {
        for (i, &x) in a.iter().enumerate() {
            for (j, &y) in b.iter().enumerate() {
                res[i + j] += x * y;
            }
        }
        return res;
    }

    let k = n >> 1;
    let (a_low, a_high) = a.split_at(k);
    let (b_low, b_high) = b.split_at(k);

    let low = karatsuba(a_low, b_low);
    let high = karatsuba(a_high, b_high);

    let a_sum: Vec<i128> = a_low.iter().zip(a_high).map(|(x, y)| x + y).collect();
    let b_sum: Vec<i128> = b_low.iter().zip(b_high).map(|(x, y)| x + y).collect();
    let mut mid = karatsuba(&a_sum, &b_sum);
    for (m, (l, h)) in mid.iter_mut().zip(low.iter().zip(high.iter())) {
        *m -= l + h;
    }

    for (i, m) in mid.iter().enumerate() {
        res[i + k] += m;
    }
    for (i, l) in low.iter().enumerate() {
        res[i] += l;
    }
    for (i, h) in high.iter().enumerate() {
        res[i + n] += h;
    }
    res
}

/// Full product of two magnitudes through the base `10^6` Karatsuba path.
pub(crate) fn mul_mag(x: &[u32], y: &[u32]) -> Vec<u32> {
    if x.is_empty() || y.is_empty() {
        return Vec::new();
    }
    if y.len() == 1 {
        return mul_small_mag(x, y[0] as u64);
    }
    if x.len() == 1 {
        return mul_small_mag(y, x[0] as u64);
    }

    let mut a: Vec<i128> = convert_base(x, BASE_DIGITS, MUL_BASE_DIGITS)
        .into_iter()
        .map(i128::from)
        .collect();
    let mut b: Vec<i128> = convert_base(y, BASE_DIGITS, MUL_BASE_DIGITS)
        .into_iter()
        .map(i128::from)
        .collect();
    let n = a.len().max(b.len()).next_power_of_two();
    a.resize(n, 0);
    b.resize(n, 0);
    trace!("karatsuba multiply: {} x {} limbs, padded to {} digits", x.len(), y.len(), n);

    let c = karatsuba(&a, &b);

    let mut digits = Vec::with_capacity(c.len() + 1);
    let mut carry: i128 = 0;
    for coeff in c {
        let cur = coeff + carry;
        digits.push((cur % MUL_BASE as i128) as u32);
        carry = cur / MUL_BASE as i128;
    }
    while carry > 0 {
        digits.push((carry % MUL_BASE as i128) as u32);
        carry /= MUL_BASE as i128;
    }
    convert_base(&digits, MUL_BASE_DIGITS, BASE_DIGITS)
}

impl BigInt {
    /// Multiplies by a native scalar in a single pass over the limbs.
    pub fn mul_small(&self, v: i32) -> BigInt {
        let sign = if v < 0 { -self.sign() } else { self.sign() };
        BigInt::from_raw(mul_small_mag(self.limbs(), v.unsigned_abs() as u64), sign)
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        BigInt::from_raw(mul_mag(self.limbs(), rhs.limbs()), self.sign() * rhs.sign())
    }
}

forward_binop!(impl Mul, mul, MulAssign, mul_assign);

impl Mul<i32> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: i32) -> BigInt {
        self.mul_small(rhs)
    }
}

forward_scalar_binop!(impl Mul, mul, MulAssign, mul_assign);

#[cfg(test)]
use crate::big_int::{big, Sign};

/// Quadratic base `10^9` product, independent of the Karatsuba path.
#[cfg(test)]
fn schoolbook(x: &BigInt, y: &BigInt) -> BigInt {
    let (a, b) = (x.limbs(), y.limbs());
    let mut acc = vec![0_u64; a.len() + b.len() + 1];
    for (i, &p) in a.iter().enumerate() {
        let mut carry = 0_u64;
        for (j, &q) in b.iter().enumerate() {
            let cur = acc[i + j] + p as u64 * q as u64 + carry;
            acc[i + j] = cur % BASE as u64;
            carry = cur / BASE as u64;
        }
        let mut k = i + b.len();
        while carry > 0 {
            let cur = acc[k] + carry;
            acc[k] = cur % BASE as u64;
            carry = cur / BASE as u64;
            k += 1;
        }
    }
    let limbs = acc.into_iter().map(|l| l as u32).collect();
    BigInt::from_raw(limbs, x.sign() * y.sign())
}

#[cfg(test)]
pub(crate) fn random_big(rng: &mut rand::rngs::StdRng, limbs: usize) -> BigInt {
    use rand::Rng;

    let mut mag: Vec<u32> = (0..limbs).map(|_| rng.random_range(0..BASE)).collect();
    if let Some(top) = mag.last_mut() {
        *top = rng.random_range(1..BASE);
    }
    let sign = if rng.random_bool(0.5) { Sign::Negative } else { Sign::Positive };
    BigInt::from_raw(mag, sign)
}

#[test]
fn test_mul_small() {
    assert_eq!(big("123456789123456789").mul_small(1000), big("123456789123456789000"));
    assert_eq!(big("-7") * 6, big("-42"));
    assert_eq!(big("-7") * -6, big("42"));
    assert_eq!(big("999999999") * i32::MIN, big("-2147483645852516352"));
    assert_eq!(big("12345") * 0, BigInt::zero());
    let mut a = big("500000000");
    a *= 2;
    assert_eq!(a.limbs(), &[0, 1]);
}

#[test]
fn test_convert_base() {
    // 123456789012345678 in base 10^9 limbs
    let limbs = [12345678, 123456789];
    let six = convert_base(&limbs, 9, 6);
    assert_eq!(six, vec![345678, 789012, 123456]);
    assert_eq!(convert_base(&six, 6, 9), limbs.to_vec());
    assert_eq!(convert_base(&[0, 0, 5], 9, 6), vec![0, 0, 0, 5]);
    assert!(convert_base(&[], 9, 6).is_empty());
}

#[test]
fn test_mul() {
    assert_eq!(big("-7") * big("6"), big("-42"));
    assert_eq!(
        big("123456789123456789") * big("987654321987654321"),
        big("121932631356500531347203169112635269")
    );
    assert_eq!(big("-1000000000") * big("-1000000000"), big("1000000000000000000"));
    assert_eq!(big("12345678901234567890") * BigInt::zero(), BigInt::zero());
    assert!(!(big("-12345678901234567890") * BigInt::zero()).is_negative());
}

#[test]
fn test_mul_karatsuba_against_schoolbook() {
    use rand::SeedableRng;

    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5eed);
    // 21 and 22 limbs sit either side of 32 base-10^6 digits, the rest recurse deeper
    for &(la, lb) in &[(20, 20), (21, 21), (22, 22), (21, 23), (40, 7), (64, 64), (150, 97), (300, 300)] {
        let a = random_big(&mut rng, la);
        let b = random_big(&mut rng, lb);
        assert_eq!(&a * &b, schoolbook(&a, &b), "{} limbs x {} limbs", la, lb);
    }
}

#[test]
fn test_mul_laws() {
    use rand::SeedableRng;

    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    for _ in 0..10 {
        let a = random_big(&mut rng, 30);
        let b = random_big(&mut rng, 17);
        let c = random_big(&mut rng, 45);
        assert_eq!(&a * &b, &b * &a);
        assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        assert_eq!(&a * &BigInt::one(), a);
    }
}

#[test]
fn test_mul_all_nines() {
    // (10^n - 1)^2 = 10^2n - 2*10^n + 1 exercises every carry path
    let nines = big(&"9".repeat(500));
    let expected = big(&format!("{}8{}1", "9".repeat(499), "0".repeat(499)));
    assert_eq!(&nines * &nines, expected);
}
