use thiserror::Error;

/// Errors produced by [`BigInt`](crate::BigInt) construction, division and narrowing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BigIntError {
    /// The literal had no digits after its sign characters.
    #[error("decimal literal contains no digits")]
    EmptyLiteral,

    /// A character other than an ASCII digit followed the sign run.
    #[error("invalid digit {found:?} at byte {position}")]
    InvalidDigit { found: char, position: usize },

    #[error("decimal literal has {digits} digits, the limit is {limit}")]
    LiteralTooLong { digits: usize, limit: usize },

    #[error("division by zero")]
    DivisionByZero,

    /// The value does not fit the requested native type.
    #[error("value does not fit in {target}")]
    Overflow { target: &'static str },
}

impl BigIntError {
    /// True for every variant produced by a malformed decimal literal.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            BigIntError::EmptyLiteral
                | BigIntError::InvalidDigit { .. }
                | BigIntError::LiteralTooLong { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, BigIntError>;
