//! Dec BigInt \
//! This crate provides:
//! - [`BigInt`]: Immutable arbitrary-precision signed integers stored in base `10^9`,
//!   with Knuth long division and Karatsuba multiplication.
//! - [`math::checked_pow`]: overflow-checked exponentiation for every native integer type.
//! - [`io::Scanner`] / [`io::Printer`]: buffered token input and output.
//!
//! ```
//! use dec_bigint::BigInt;
//!
//! let a: BigInt = "123456789123456789".parse().unwrap();
//! let b: BigInt = "876543210876543211".parse().unwrap();
//! assert_eq!((&a + &b).to_string(), "1000000000000000000");
//!
//! let (q, r) = BigInt::from(1_000_000_000).div_mod(&BigInt::from(3)).unwrap();
//! assert_eq!((q.to_string(), r.to_string()), ("333333333".to_string(), "1".to_string()));
//! assert_eq!(BigInt::from(2).pow(64).to_string(), "18446744073709551616");
//! ```

#[macro_use]
mod big_int;
mod big_int_div;
mod big_int_mul;
mod big_int_pow;
mod big_num_cache;
mod big_num_constants;
mod error;

pub mod io;
pub mod math;

pub use big_int::{BigInt, Sign};
pub use big_num_constants::{BASE, BASE_DIGITS, MAX_DECIMAL_DIGITS};
pub use error::BigIntError;

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "900000000000".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000000");
    }

    #[test]
    fn literal_scenarios() {
        let sum: BigInt = "123456789123456789".parse::<BigInt>().unwrap()
            + "876543210876543211".parse::<BigInt>().unwrap();
        assert_eq!(sum, "1000000000000000000".parse().unwrap());
        assert_eq!(BigInt::from(-7) * BigInt::from(6), BigInt::from(-42));
    }
}
