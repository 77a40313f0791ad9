//! The sole constructor of [`Poly::Composite`] values.
//!
//! Every operation that produces a polynomial from a bag of monomials —
//! the parser, multiplication's cross product, addition's merged monomial
//! list — funnels through here (or through [`finish`], its lower-level
//! half) so that canonical form is an invariant maintained once, not
//! re-checked by every consumer.

use super::arithmetic::add;
use super::monomial::Monomial;
use super::value::Poly;

/// Builds a polynomial from an unordered, possibly-redundant bag of
/// monomials.
///
/// `monos` may be empty, contain duplicate exponents, or contain
/// zero-coefficient monomials — `from_monomials` sorts by exponent
/// (stably), sums coefficients sharing an exponent, drops any that sum to
/// zero, and collapses to a bare constant when the result is a single
/// exponent-0 monomial over a constant coefficient. The result always
/// satisfies the four canonical-form invariants.
///
/// Because a [`Poly`] owns its storage outright, this function always
/// consumes its argument; a caller that still needs its own copy of the
/// monomials should clone them before calling.
pub fn from_monomials(mut monos: Vec<Monomial>) -> Poly {
    if monos.is_empty() {
        return Poly::zero();
    }

    monos.sort_by_key(|m| m.exp);

    let mut merged: Vec<Monomial> = Vec::with_capacity(monos.len());
    for mono in monos {
        match merged.last_mut() {
            Some(last) if last.exp == mono.exp => {
                last.coeff = add(&last.coeff, &mono.coeff);
            }
            _ => merged.push(mono),
        }
    }
    merged.retain(|m| !m.coeff.is_zero());

    finish(merged)
}

/// The collapse rules shared by [`from_monomials`] and by the arithmetic
/// kernel's own merge routines: a list of monomials that is already
/// sorted, exponent-unique, and free of zero coefficients still needs to
/// be checked for the two degenerate cases that make it *not* a valid
/// composite — empty, or a single constant term at exponent 0.
pub(super) fn finish(monos: Vec<Monomial>) -> Poly {
    if monos.is_empty() {
        return Poly::zero();
    }
    if monos.len() == 1 && monos[0].exp == 0 {
        if let Poly::Constant(c) = monos[0].coeff {
            return Poly::Constant(c);
        }
    }
    Poly::Composite(monos)
}
