//! Recursive-descent parser for the polynomial literal grammar:
//!
//! ```text
//! Poly := Mono ( '+' Mono )*
//! Mono := coeff
//!       | '(' ( coeff | Poly ) ',' exp ')'
//! ```
//!
//! A bare `coeff` is only a legal `Mono` when it is the entire `Poly` —
//! `5+3` is not a valid literal, only `(5,0)+(3,0)` is. This is enforced
//! structurally below rather than by the grammar alone.

use crate::poly::{from_monomials, Monomial, Poly};

use super::error::ParseError;
use super::reader::{cursor, read_coefficient, read_exponent, Cursor};

/// Parses one complete polynomial literal from `line`. `line` may include
/// its trailing `\n` (or omit it, at true EOF); anything else left over
/// after the polynomial is a parse error.
pub fn parse_poly(line: &[u8]) -> Result<Poly, ParseError> {
    let mut chars = cursor(line);
    let result = parse_poly_body(&mut chars)?;
    match chars.peek() {
        None | Some(&b'\n') => Ok(result),
        _ => Err(ParseError::TrailingInput),
    }
}

/// `Poly := Mono ('+' Mono)*`, usable both as the top-level entry point
/// and recursively as a parenthesised coefficient, since both contexts
/// terminate on the same set of bytes (`,`, `\n`, or EOF).
fn parse_poly_body(chars: &mut Cursor<'_>) -> Result<Poly, ParseError> {
    let first_is_bare = matches!(chars.peek(), Some(&b) if b == b'-' || b.is_ascii_digit());

    let first = parse_mono(chars)?;
    let mut monos = vec![first];

    let mut saw_addend = false;
    while chars.next_if_eq(&b'+').is_some() {
        saw_addend = true;
        monos.push(parse_mono(chars)?);
    }

    if first_is_bare && saw_addend {
        return Err(ParseError::BareCoefficientWithAddend);
    }

    Ok(from_monomials(monos))
}

fn parse_mono(chars: &mut Cursor<'_>) -> Result<Monomial, ParseError> {
    match chars.peek() {
        Some(&b) if b == b'-' || b.is_ascii_digit() => {
            let coeff = read_coefficient(chars)?;
            Ok(Monomial::constant_term(coeff))
        }
        Some(&b'(') => {
            chars.next();
            let coeff = match chars.peek() {
                Some(&b) if b == b'-' || b.is_ascii_digit() => {
                    Poly::constant(read_coefficient(chars)?)
                }
                Some(&b'(') => parse_poly_body(chars)?,
                _ => return Err(ParseError::UnexpectedByte),
            };
            expect(chars, b',')?;
            let exp = read_exponent(chars)?;
            expect(chars, b')')?;

            if coeff.is_zero() {
                Ok(Monomial::new(coeff, 0))
            } else {
                Ok(Monomial::new(coeff, exp))
            }
        }
        _ => Err(ParseError::UnexpectedByte),
    }
}

fn expect(chars: &mut Cursor<'_>, byte: u8) -> Result<(), ParseError> {
    if chars.next_if_eq(&byte).is_some() {
        Ok(())
    } else {
        Err(ParseError::UnexpectedByte)
    }
}
