//! Helpers over native integers.

use crate::error::{BigIntError, Result};

mod private {
    pub trait Sealed {}
}

/// Any primitive integer type. Drives binary exponentiation for both
/// [`checked_pow`] and [`BigInt::pow`](crate::BigInt::pow).
pub trait NativeInt: Copy + private::Sealed {
    const NAME: &'static str;

    fn one() -> Self;
    fn is_positive(self) -> bool;
    fn is_odd(self) -> bool;
    fn halve(self) -> Self;
    fn checked_mul(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_native_int {
    ($($t: ty),*) => {
    $(
    impl private::Sealed for $t {}

    impl NativeInt for $t {
        const NAME: &'static str = stringify!($t);

        fn one() -> Self {
            1
        }
        fn is_positive(self) -> bool {
            self > 0
        }
        fn is_odd(self) -> bool {
            self % 2 != 0
        }
        fn halve(self) -> Self {
            self / 2
        }
        fn checked_mul(self, rhs: Self) -> Option<Self> {
            <$t>::checked_mul(self, rhs)
        }
    }
    )*
    };
}
impl_native_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// `num^exp` by repeated squaring. Exponents `<= 0` yield 1, the same policy
/// as [`BigInt::pow`](crate::BigInt::pow). Fails with [`BigIntError::Overflow`]
/// when the result leaves the range of `T`.
pub fn checked_pow<T: NativeInt>(num: T, exp: T) -> Result<T> {
    let overflow = BigIntError::Overflow { target: T::NAME };
    let mut result = T::one();
    let mut base = num;
    let mut exp = exp;
    while exp.is_positive() {
        if exp.is_odd() {
            result = result.checked_mul(base).ok_or_else(|| overflow.clone())?;
        }
        exp = exp.halve();
        if exp.is_positive() {
            base = base.checked_mul(base).ok_or_else(|| overflow.clone())?;
        }
    }
    Ok(result)
}

#[test]
fn test_checked_pow() {
    assert_eq!(checked_pow(2_i64, 62), Ok(1 << 62));
    assert_eq!(checked_pow(-3_i32, 3), Ok(-27));
    assert_eq!(checked_pow(10_u64, 19), Ok(10_000_000_000_000_000_000));
    assert_eq!(checked_pow(7_u8, 0), Ok(1));
    assert_eq!(checked_pow(7_i16, -2), Ok(1));
    assert_eq!(checked_pow(0_i32, 0), Ok(1));
    assert_eq!(checked_pow(2_i64, 63), Err(BigIntError::Overflow { target: "i64" }));
    assert_eq!(checked_pow(-2_i8, 7), Ok(i8::MIN));
    assert_eq!(checked_pow(2_u8, 8), Err(BigIntError::Overflow { target: "u8" }));
}
