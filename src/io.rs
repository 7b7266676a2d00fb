//! Buffered, whitespace-tokenized text input and output.
//!
//! Both halves are plain owned values: build one per entry point and pass it
//! by `&mut` to whatever needs to read or print.
//! ```
//! use dec_bigint::io::{Printer, Scanner};
//! use dec_bigint::BigInt;
//!
//! let mut scanner = Scanner::new("2 64\n".as_bytes());
//! let base: BigInt = scanner.next().unwrap();
//! let exp: u32 = scanner.next().unwrap();
//!
//! let mut out = Vec::new();
//! {
//!     let mut printer = Printer::new(&mut out);
//!     printer.println(base.pow(exp)).unwrap();
//! }
//! assert_eq!(out, b"18446744073709551616\n");
//! ```

use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{self, BufRead, BufWriter, Write};
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("cannot parse {token:?}: {message}")]
    Parse { token: String, message: String },
}

pub struct Scanner<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Scanner { reader, pending: VecDeque::new() }
    }

    /// Next whitespace-separated token, or `None` at end of input.
    pub fn token(&mut self) -> Result<Option<String>, ScanError> {
        let mut line = String::new();
        while self.pending.is_empty() {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(String::from));
        }
        Ok(self.pending.pop_front())
    }

    /// Reads and parses the next token.
    pub fn next<T>(&mut self) -> Result<T, ScanError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let token = self.token()?.ok_or(ScanError::UnexpectedEof)?;
        token.parse().map_err(|e: T::Err| ScanError::Parse {
            message: e.to_string(),
            token,
        })
    }

    /// Like [`Scanner::next`], but a clean end of input gives `Ok(None)`.
    pub fn try_next<T>(&mut self) -> Result<Option<T>, ScanError>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.token()? {
            None => Ok(None),
            Some(token) => token
                .parse()
                .map(Some)
                .map_err(|e: T::Err| ScanError::Parse { message: e.to_string(), token }),
        }
    }
}

/// Buffered writer, flushed on drop.
pub struct Printer<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> Printer<W> {
    pub fn new(writer: W) -> Self {
        Printer { writer: BufWriter::new(writer) }
    }

    pub fn print<T: Display>(&mut self, val: T) -> io::Result<&mut Self> {
        write!(self.writer, "{}", val)?;
        Ok(self)
    }

    pub fn println<T: Display>(&mut self, val: T) -> io::Result<&mut Self> {
        writeln!(self.writer, "{}", val)?;
        Ok(self)
    }

    pub fn newline(&mut self) -> io::Result<&mut Self> {
        self.writer.write_all(b"\n")?;
        Ok(self)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
use crate::BigInt;

#[test]
fn test_scanner_mixed_tokens() {
    let input = "  -123456789123456789  42\n\n3.5 word\n";
    let mut scanner = Scanner::new(input.as_bytes());
    let a: BigInt = scanner.next().unwrap();
    assert_eq!(a.to_string(), "-123456789123456789");
    assert_eq!(scanner.next::<i64>().unwrap(), 42);
    assert_eq!(scanner.next::<f64>().unwrap(), 3.5);
    match scanner.next::<BigInt>() {
        Err(ScanError::Parse { token, .. }) => assert_eq!(token, "word"),
        other => panic!("unexpected {:?}", other),
    }
    assert!(matches!(scanner.next::<i32>(), Err(ScanError::UnexpectedEof)));
    assert!(scanner.try_next::<i32>().unwrap().is_none());
}

#[test]
fn test_printer_chains() {
    let mut out = Vec::new();
    {
        let mut printer = Printer::new(&mut out);
        printer
            .print(BigInt::from(-5))
            .and_then(|p| p.print(' '))
            .and_then(|p| p.println(7))
            .and_then(|p| p.newline())
            .unwrap();
        printer.flush().unwrap();
    }
    assert_eq!(String::from_utf8(out).unwrap(), "-5 7\n\n");
}
