//! The arithmetic kernel: addition, negation, subtraction, multiplication.
//!
//! Every function here takes canonical inputs and returns a canonical
//! result; none re-derives canonical form from scratch where a cheaper,
//! targeted collapse check suffices (see [`super::canonicalize::finish`]).

use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};

use super::canonicalize::{finish, from_monomials};
use super::monomial::Monomial;
use super::value::Poly;

pub fn add(p: &Poly, q: &Poly) -> Poly {
    match (p, q) {
        (Poly::Constant(a), Poly::Constant(b)) => Poly::Constant(a + b),
        (Poly::Constant(c), Poly::Composite(monos)) => add_constant_composite(*c, monos),
        (Poly::Composite(monos), Poly::Constant(c)) => add_constant_composite(*c, monos),
        (Poly::Composite(a), Poly::Composite(b)) => add_composites(a, b),
    }
}

/// Splices a constant into a composite's exponent-0 slot, merging with
/// whatever is already there.
///
/// A zero-valued `c` is a no-op. Otherwise, if the composite already has
/// an exponent-0 monomial, the constant is folded into that monomial's
/// coefficient (recursively, since that coefficient is itself a
/// polynomial one variable down); if the fold happens to cancel it to
/// zero, that monomial is dropped. If there is no exponent-0 monomial, a
/// new one is inserted at the front. Neither branch needs a further
/// "did this collapse to a bare constant" check: the composite had at
/// least one non-exponent-0 monomial to begin with (size-1-exp-0-constant
/// composites are already collapsed away), so the result always keeps at
/// least one monomial beyond the one just touched, or keeps its size.
fn add_constant_composite(c: i64, monos: &[Monomial]) -> Poly {
    if c == 0 {
        return Poly::Composite(monos.to_vec());
    }

    match monos.first() {
        Some(first) if first.exp == 0 => {
            let folded = add(&first.coeff, &Poly::Constant(c));
            if folded.is_zero() {
                if monos.len() == 1 {
                    Poly::zero()
                } else {
                    Poly::Composite(monos[1..].to_vec())
                }
            } else {
                let mut merged = Vec::with_capacity(monos.len());
                merged.push(Monomial::new(folded, 0));
                merged.extend_from_slice(&monos[1..]);
                Poly::Composite(merged)
            }
        }
        _ => {
            let mut merged = Vec::with_capacity(monos.len() + 1);
            merged.push(Monomial::constant_term(c));
            merged.extend_from_slice(monos);
            Poly::Composite(merged)
        }
    }
}

/// Merges two exponent-sorted monomial lists, summing coefficients where
/// exponents coincide and dropping any sum that cancels to zero. The
/// inputs are already canonical, so no further invariant can break except
/// the global shape (empty, or single-constant) that [`finish`] checks.
fn add_composites(a: &[Monomial], b: &[Monomial]) -> Poly {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].exp.cmp(&b[j].exp) {
            Ordering::Less => {
                merged.push(a[i].clone());
                i += 1;
            }
            Ordering::Greater => {
                merged.push(b[j].clone());
                j += 1;
            }
            Ordering::Equal => {
                let summed = add(&a[i].coeff, &b[j].coeff);
                if !summed.is_zero() {
                    merged.push(Monomial::new(summed, a[i].exp));
                }
                i += 1;
                j += 1;
            }
        }
    }
    merged.extend_from_slice(&a[i..]);
    merged.extend_from_slice(&b[j..]);

    finish(merged)
}

pub fn neg(p: &Poly) -> Poly {
    if p.is_zero() {
        return Poly::zero();
    }
    match p {
        Poly::Constant(c) => Poly::Constant(-c),
        Poly::Composite(monos) => Poly::Composite(
            monos
                .iter()
                .map(|m| Monomial::new(neg(&m.coeff), m.exp))
                .collect(),
        ),
    }
}

pub fn sub(p: &Poly, q: &Poly) -> Poly {
    add(p, &neg(q))
}

pub fn mul(p: &Poly, q: &Poly) -> Poly {
    match (p, q) {
        (Poly::Constant(a), Poly::Constant(b)) => Poly::Constant(a * b),
        (Poly::Constant(c), Poly::Composite(monos)) => mul_constant_composite(*c, monos),
        (Poly::Composite(monos), Poly::Constant(c)) => mul_constant_composite(*c, monos),
        (Poly::Composite(a), Poly::Composite(b)) => mul_composites(a, b),
    }
}

fn mul_constant_composite(c: i64, monos: &[Monomial]) -> Poly {
    if c == 0 {
        return Poly::zero();
    }
    let scaled: Vec<Monomial> = monos
        .iter()
        .filter_map(|m| {
            let coeff = mul(&m.coeff, &Poly::Constant(c));
            (!coeff.is_zero()).then(|| Monomial::new(coeff, m.exp))
        })
        .collect();
    if scaled.is_empty() {
        Poly::zero()
    } else {
        Poly::Composite(scaled)
    }
}

/// The full cross product of two monomial lists, re-canonicalized from
/// scratch: unlike addition's merge, multiplication's output exponents
/// (sums of input exponents) aren't already sorted or exponent-unique, so
/// there is no shortcut around [`from_monomials`]'s sort-and-coalesce.
fn mul_composites(a: &[Monomial], b: &[Monomial]) -> Poly {
    let mut cross = Vec::with_capacity(a.len() * b.len());
    for m1 in a {
        for m2 in b {
            cross.push(Monomial::new(mul(&m1.coeff, &m2.coeff), m1.exp + m2.exp));
        }
    }
    from_monomials(cross)
}

impl Add for &Poly {
    type Output = Poly;
    fn add(self, rhs: &Poly) -> Poly {
        add(self, rhs)
    }
}

impl Sub for &Poly {
    type Output = Poly;
    fn sub(self, rhs: &Poly) -> Poly {
        sub(self, rhs)
    }
}

impl Mul for &Poly {
    type Output = Poly;
    fn mul(self, rhs: &Poly) -> Poly {
        mul(self, rhs)
    }
}

impl Neg for &Poly {
    type Output = Poly;
    fn neg(self) -> Poly {
        neg(self)
    }
}
