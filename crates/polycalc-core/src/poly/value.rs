use super::monomial::Monomial;

/// A sparse polynomial over a chain of implicit, positional variables
/// `x0, x1, x2, ...`.
///
/// A polynomial is either a bare coefficient, or a non-empty,
/// strictly-exponent-ordered list of monomials whose own coefficients are
/// polynomials over the next variable. Every value produced by the
/// arithmetic kernel and the canonicalizer satisfies the invariants
/// documented on [`from_monomials`](super::from_monomials): exponents
/// strictly increase, no monomial's coefficient is zero, and a composite
/// that could collapse to a single constant already has.
#[derive(Debug, Clone)]
pub enum Poly {
    /// A constant polynomial (a monomial of exponent 0 over no further
    /// variables).
    Constant(i64),
    /// A non-empty, exponent-ordered list of monomials.
    Composite(Vec<Monomial>),
}

impl Poly {
    /// The polynomial identically equal to zero.
    pub fn zero() -> Self {
        Poly::Constant(0)
    }

    /// A constant polynomial holding `value`.
    pub fn constant(value: i64) -> Self {
        Poly::Constant(value)
    }

    /// `true` iff `self` is structurally a bare [`Poly::Constant`].
    ///
    /// This is a shallow check; see [`Poly::is_coefficient`] for the
    /// recursive, defensive version that also accepts composites that
    /// structurally collapse to a constant.
    pub fn is_constant(&self) -> bool {
        matches!(self, Poly::Constant(_))
    }

    /// The monomials of a composite, or `None` for a constant.
    pub fn monomials(&self) -> Option<&[Monomial]> {
        match self {
            Poly::Constant(_) => None,
            Poly::Composite(monos) => Some(monos),
        }
    }
}

impl Default for Poly {
    fn default() -> Self {
        Poly::zero()
    }
}
