/// Radix of a stored limb.
pub const BASE: u32 = 1_000_000_000;

/// Decimal digits held by one limb.
pub const BASE_DIGITS: usize = 9;

/// Radix used while multiplying two big values.
pub const MUL_BASE: u32 = 1_000_000;

pub const MUL_BASE_DIGITS: usize = 6;

/// Operands of at most this many base-10^6 digits are multiplied by direct convolution.
pub const KARATSUBA_THRESHOLD: usize = 32;

/// Longest decimal literal accepted by the parser.
pub const MAX_DECIMAL_DIGITS: usize = 1 << 24;

pub const MAX_CONSTANT: usize = 16;

/// `POW10[i] == 10^i`, enough for any base conversion between 10^6 and 10^9.
pub const POW10: [u64; 10] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];
