//! Reads `lhs op rhs` triples from stdin and prints one result per triple.
//! Supported operators: `+ - * / % ^ gcd lcm cmp`.

use std::io::{self, Write};
use std::process::ExitCode;

use dec_bigint::io::{Printer, ScanError, Scanner};
use dec_bigint::{BigInt, BigIntError, MAX_DECIMAL_DIGITS};

#[derive(Debug, thiserror::Error)]
enum CalcError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Arith(#[from] BigIntError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("unknown operator {0:?}")]
    UnknownOperator(String),
    #[error("exponent {0} would exceed {} result digits", MAX_DECIMAL_DIGITS)]
    ExponentTooLarge(BigInt),
}

/// `lhs ^ rhs`, refused when the result could grow past the parse limit.
fn bounded_pow(lhs: &BigInt, rhs: &BigInt) -> Result<BigInt, CalcError> {
    if lhs.abs() > BigInt::one() && *rhs > BigInt::zero() {
        // |lhs| < 10^d, so the result has at most d * rhs digits
        let digits = lhs.abs().to_string().len() as u128;
        let exp = rhs.to_i64().map_or(u128::MAX, |e| e as u128);
        if digits.saturating_mul(exp) > MAX_DECIMAL_DIGITS as u128 {
            return Err(CalcError::ExponentTooLarge(rhs.clone()));
        }
    }
    Ok(lhs.pow_big(rhs))
}

fn eval(lhs: &BigInt, op: &str, rhs: &BigInt) -> Result<String, CalcError> {
    let result = match op {
        "+" => lhs + rhs,
        "-" => lhs - rhs,
        "*" => lhs * rhs,
        "/" => lhs.checked_div(rhs)?,
        "%" => lhs.checked_rem(rhs)?,
        "^" => bounded_pow(lhs, rhs)?,
        "gcd" => lhs.gcd(rhs),
        "lcm" => lhs.lcm(rhs),
        "cmp" => return Ok(format!("{:?}", lhs.cmp(rhs))),
        other => return Err(CalcError::UnknownOperator(other.to_string())),
    };
    Ok(result.to_string())
}

fn run<W: Write>(scanner: &mut Scanner<impl io::BufRead>, printer: &mut Printer<W>) -> Result<(), CalcError> {
    while let Some(lhs) = scanner.try_next::<BigInt>()? {
        let op: String = scanner.next()?;
        let rhs: BigInt = scanner.next()?;
        log::debug!("evaluating {} {} {}", lhs, op, rhs);
        printer.println(eval(&lhs, &op, &rhs)?)?;
    }
    printer.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let stdin = io::stdin();
    let mut scanner = Scanner::new(stdin.lock());
    let mut printer = Printer::new(io::stdout().lock());
    match run(&mut scanner, &mut printer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Err(flush_err) = printer.flush() {
                log::warn!("failed to flush output: {}", flush_err);
            }
            eprintln!("bigcalc: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[test]
fn test_run_triples() {
    let input = "123456789123456789 + 876543210876543211\n-7 * 6\n1000000000 / 3\n2 ^ 64\n12 gcd 18\n-5 cmp 3\n";
    let mut scanner = Scanner::new(input.as_bytes());
    let mut out = Vec::new();
    {
        let mut printer = Printer::new(&mut out);
        run(&mut scanner, &mut printer).unwrap();
    }
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "1000000000000000000\n-42\n333333333\n18446744073709551616\n6\nLess\n"
    );
}

#[test]
fn test_run_reports_division_by_zero() {
    let mut scanner = Scanner::new("1 / 0\n".as_bytes());
    let mut printer = Printer::new(Vec::new());
    let err = run(&mut scanner, &mut printer).unwrap_err();
    assert_eq!(err.to_string(), "division by zero");
}

#[test]
fn test_pow_is_bounded() {
    let two = BigInt::from(2);
    assert_eq!(bounded_pow(&two, &BigInt::from(64)).unwrap().to_string(), "18446744073709551616");
    // bases with magnitude at most one never grow
    let big_exp: BigInt = "100000000000000000000000".parse().unwrap();
    assert_eq!(bounded_pow(&BigInt::from(-1), &big_exp).unwrap(), BigInt::one());
    assert_eq!(bounded_pow(&BigInt::zero(), &big_exp).unwrap(), BigInt::zero());
    assert_eq!(bounded_pow(&two, &BigInt::from(-5)).unwrap(), BigInt::one());

    let mut scanner = Scanner::new("2 ^ 100000000000\n".as_bytes());
    let mut printer = Printer::new(Vec::new());
    let err = run(&mut scanner, &mut printer).unwrap_err();
    assert!(matches!(err, CalcError::ExponentTooLarge(_)));
    assert!(matches!(bounded_pow(&two, &big_exp), Err(CalcError::ExponentTooLarge(_))));
}
