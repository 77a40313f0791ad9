use std::fmt;

use super::value::Poly;

/// Renders a polynomial in the same notation the parser accepts: a bare
/// integer for a constant, or a `+`-separated list of `(coeff,exp)` pairs
/// for a composite, with each `coeff` rendered recursively by the same
/// rule.
impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Poly::Constant(c) => write!(f, "{c}"),
            Poly::Composite(monos) => {
                for (i, m) in monos.iter().enumerate() {
                    if i > 0 {
                        write!(f, "+")?;
                    }
                    write!(f, "({},{})", m.coeff, m.exp)?;
                }
                Ok(())
            }
        }
    }
}
