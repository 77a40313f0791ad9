//! Structural queries and the two substitution operations, `at` and
//! `compose`.

use super::arithmetic::{add, mul};
use super::value::Poly;

impl Poly {
    /// `true` iff `self` is the zero polynomial.
    ///
    /// Besides the obvious `Constant(0)`, a composite can be degenerately
    /// zero-shaped — a single monomial whose coefficient is itself zero —
    /// which no operation in this crate ever produces, but which this
    /// check still recognizes rather than assume away.
    pub fn is_zero(&self) -> bool {
        match self {
            Poly::Constant(c) => *c == 0,
            Poly::Composite(monos) => monos.len() == 1 && monos[0].coeff.is_zero(),
        }
    }

    /// `true` iff `self` is a constant, or structurally collapses to one:
    /// a chain of single-monomial, exponent-0 composites bottoming out in
    /// a `Constant`.
    pub fn is_coefficient(&self) -> bool {
        match self {
            Poly::Constant(_) => true,
            Poly::Composite(monos) => {
                monos.len() == 1 && monos[0].exp == 0 && monos[0].coeff.is_coefficient()
            }
        }
    }

    /// The scalar value of a polynomial for which [`is_coefficient`] holds.
    ///
    /// [`is_coefficient`]: Poly::is_coefficient
    fn coefficient_value(&self) -> i64 {
        match self {
            Poly::Constant(c) => *c,
            Poly::Composite(monos) => monos[0].coeff.coefficient_value(),
        }
    }

    /// Structural equality: two polynomials are equal iff they denote the
    /// same value, which canonical form makes the same as having identical
    /// shape — matching exponents and recursively equal coefficients — with
    /// one wrinkle: a bare constant and a composite that collapses to that
    /// same constant (see [`is_coefficient`]) also compare equal.
    ///
    /// [`is_coefficient`]: Poly::is_coefficient
    pub fn equals(&self, other: &Poly) -> bool {
        match (self, other) {
            (Poly::Constant(a), Poly::Constant(b)) => a == b,
            (Poly::Constant(c), Poly::Composite(_)) => {
                other.is_coefficient() && other.coefficient_value() == *c
            }
            (Poly::Composite(_), Poly::Constant(c)) => {
                self.is_coefficient() && self.coefficient_value() == *c
            }
            (Poly::Composite(a), Poly::Composite(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b.iter())
                        .all(|(m1, m2)| m1.exp == m2.exp && m1.coeff.equals(&m2.coeff))
            }
        }
    }

    /// Total degree: the zero polynomial has degree `-1`; a constant has
    /// degree `0`; a composite's degree is the maximum, over its
    /// monomials, of the monomial's exponent plus its coefficient's total
    /// degree.
    pub fn deg(&self) -> i32 {
        if self.is_zero() {
            return -1;
        }
        self.deg_unchecked()
    }

    fn deg_unchecked(&self) -> i32 {
        match self {
            Poly::Constant(_) => 0,
            Poly::Composite(monos) => monos
                .iter()
                .map(|m| m.exp + m.coeff.deg_unchecked())
                .max()
                .unwrap_or(0),
        }
    }

    /// Degree with respect to the variable at position `idx` (0-based, so
    /// `idx == 0` is the outermost variable). The zero polynomial has
    /// degree `-1` with respect to every variable; a constant has degree
    /// `0` with respect to every variable, including ones it doesn't
    /// mention, per the usual convention.
    pub fn deg_by(&self, idx: usize) -> i32 {
        if self.is_zero() {
            return -1;
        }
        self.deg_by_unchecked(idx)
    }

    fn deg_by_unchecked(&self, idx: usize) -> i32 {
        match self {
            Poly::Constant(_) => 0,
            Poly::Composite(monos) => {
                if idx == 0 {
                    monos.last().map(|m| m.exp).unwrap_or(0)
                } else {
                    monos
                        .iter()
                        .map(|m| m.coeff.deg_by_unchecked(idx - 1))
                        .max()
                        .unwrap_or(0)
                }
            }
        }
    }

    /// Substitutes `x` for this polynomial's outermost variable, yielding
    /// a polynomial over the remaining variables renumbered down by one.
    ///
    /// Each monomial `coeff * x0^exp` contributes `coeff * x^exp`, a
    /// polynomial over the *same* renumbered variables as `coeff`; the
    /// monomials are summed through the arithmetic kernel, so the result
    /// is canonical by construction regardless of how many terms
    /// cancelled.
    pub fn at(&self, x: i64) -> Poly {
        match self {
            Poly::Constant(_) => self.clone(),
            Poly::Composite(monos) => {
                let mut acc = Poly::zero();
                for m in monos {
                    let scale = Poly::Constant(power_i64(x, m.exp));
                    acc = add(&acc, &mul(&m.coeff, &scale));
                }
                acc
            }
        }
    }

    /// Substitutes `q[0], q[1], ...` for this polynomial's variables
    /// `x0, x1, ...` in order, padding any variable beyond `q`'s length
    /// with zero.
    pub fn compose(&self, q: &[Poly]) -> Poly {
        compose_at(self, q, 0)
    }
}

fn compose_at(p: &Poly, q: &[Poly], depth: usize) -> Poly {
    match p {
        Poly::Constant(_) => p.clone(),
        Poly::Composite(monos) => {
            let substitute = q.get(depth).cloned().unwrap_or_else(Poly::zero);
            let mut acc = Poly::zero();
            for m in monos {
                let coeff = compose_at(&m.coeff, q, depth + 1);
                let scale = power(&substitute, m.exp);
                acc = add(&acc, &mul(&coeff, &scale));
            }
            acc
        }
    }
}

/// `x^e` by repeated squaring, for the scalar substitution in [`Poly::at`].
fn power_i64(x: i64, e: i32) -> i64 {
    let mut base = x;
    let mut exp = e as u32;
    let mut result: i64 = 1;
    while exp > 0 {
        if exp & 1 == 1 {
            result *= base;
        }
        base *= base;
        exp >>= 1;
    }
    result
}

/// `p^e` by repeated squaring, for the polynomial substitution in
/// [`Poly::compose`].
fn power(p: &Poly, e: i32) -> Poly {
    if e == 0 {
        return Poly::constant(1);
    }
    if p.is_zero() {
        return Poly::zero();
    }
    let mut base = p.clone();
    let mut exp = e as u32;
    let mut result = Poly::constant(1);
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul(&result, &base);
        }
        exp >>= 1;
        if exp > 0 {
            base = mul(&base, &base);
        }
    }
    result
}

impl PartialEq for Poly {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}
