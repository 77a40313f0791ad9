//! Stream-coupled token readers over a one-byte-of-lookahead cursor.
//!
//! The grammar is pure ASCII, so the cursor works over raw bytes rather
//! than decoded `char`s — the Rust replacement for the original's
//! `getchar`/`ungetc` pushback is `Peekable::peek`, which serves the same
//! role without ever consuming the terminator the caller still needs to
//! look at.

use std::iter::Peekable;

use super::error::ReaderError;

/// A cursor over a line's bytes with one byte of lookahead.
pub type Cursor<'a> = Peekable<std::iter::Copied<std::slice::Iter<'a, u8>>>;

pub fn cursor(line: &[u8]) -> Cursor<'_> {
    line.iter().copied().peekable()
}

fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Reads an optionally-signed integer coefficient: `-`? digit+. Leaves the
/// terminating byte (`,`, `\n`, or EOF) unconsumed.
pub fn read_coefficient(chars: &mut Cursor<'_>) -> Result<i64, ReaderError> {
    let negative = chars.next_if_eq(&b'-').is_some();

    let mut saw_digit = false;
    let mut magnitude: i64 = 0;
    while let Some(&b) = chars.peek() {
        if !is_digit(b) {
            break;
        }
        chars.next();
        saw_digit = true;
        magnitude = magnitude
            .checked_mul(10)
            .and_then(|m| m.checked_add((b - b'0') as i64))
            .ok_or(ReaderError::Overflow)?;
    }

    if !saw_digit {
        return Err(if negative {
            ReaderError::NotADigit
        } else {
            ReaderError::MissingDigits
        });
    }

    if negative {
        magnitude.checked_neg().ok_or(ReaderError::Overflow)
    } else {
        Ok(magnitude)
    }
}

/// Reads an unsigned integer: digit+, no sign permitted. Leaves the
/// terminating byte unconsumed.
pub fn read_unsigned(chars: &mut Cursor<'_>) -> Result<u64, ReaderError> {
    let mut saw_digit = false;
    let mut value: u64 = 0;
    while let Some(&b) = chars.peek() {
        if !is_digit(b) {
            break;
        }
        chars.next();
        saw_digit = true;
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add((b - b'0') as u64))
            .ok_or(ReaderError::Overflow)?;
    }
    if !saw_digit {
        return Err(ReaderError::MissingDigits);
    }
    Ok(value)
}

/// Reads an exponent: digit+, fitting in a non-negative `i32`. Leaves the
/// terminating byte unconsumed.
pub fn read_exponent(chars: &mut Cursor<'_>) -> Result<i32, ReaderError> {
    let value = read_unsigned(chars)?;
    i32::try_from(value).map_err(|_| ReaderError::Overflow)
}
