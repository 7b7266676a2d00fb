use lazy_static::*;

use crate::big_int::Sign;
use crate::big_num_constants::*;
use crate::BigInt;

lazy_static! {
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] = {
        let mut cache: [BigInt; MAX_CONSTANT + 1] = Default::default();
        for (i, slot) in cache.iter_mut().enumerate().skip(1) {
            *slot = BigInt::from_raw(vec![i as u32], Sign::Positive);
        }
        cache
    };
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] = {
        let mut cache: [BigInt; MAX_CONSTANT + 1] = Default::default();
        for (i, slot) in cache.iter_mut().enumerate().skip(1) {
            *slot = BigInt::from_raw(vec![i as u32], Sign::Negative);
        }
        cache
    };
}

#[test]
fn test_cache_is_canonical() {
    assert!(POS_CACHE[0].is_zero());
    assert!(!NEG_CACHE[0].is_negative());
    assert_eq!(POS_CACHE[16].to_string(), "16");
    assert_eq!(NEG_CACHE[7].to_string(), "-7");
}
