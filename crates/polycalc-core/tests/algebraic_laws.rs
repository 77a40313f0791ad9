//! Property-based checks of the algebraic laws and canonical-form
//! invariant the arithmetic kernel must uphold for every input, not just
//! hand-picked cases (concrete unit tests for those live beside the
//! kernel in `src/poly/tests.rs`).

use proptest::prelude::*;

use polycalc_core::{parse_poly, Monomial, Poly};

/// A recursive `Poly` generator bounded in depth and per-level width, so
/// generated values stay small enough for the associativity/distributivity
/// properties (which combine three generated values) to run quickly.
fn arb_poly() -> impl Strategy<Value = Poly> {
    let leaf = any::<i8>().prop_map(|c| Poly::constant(c as i64));
    leaf.prop_recursive(3, 20, 3, |inner| {
        prop::collection::vec((inner, 0i32..5), 1..3).prop_map(|pairs| {
            let monos = pairs
                .into_iter()
                .map(|(coeff, exp)| Monomial::new(coeff, exp))
                .collect();
            polycalc_core::from_monomials(monos)
        })
    })
}

/// Structural re-check of the canonical-form invariants, independent of
/// the canonicalizer under test: strictly increasing exponents, no zero
/// coefficient-polynomials, and no degenerate single-constant composite.
fn is_canonical(p: &Poly) -> bool {
    match p {
        Poly::Constant(_) => true,
        Poly::Composite(monos) => {
            if monos.is_empty() {
                return false;
            }
            if monos.len() == 1 && monos[0].exp == 0 && monos[0].coeff.is_constant() {
                return false;
            }
            let mut last_exp: Option<i32> = None;
            for m in monos {
                if let Some(prev) = last_exp {
                    if m.exp <= prev {
                        return false;
                    }
                }
                last_exp = Some(m.exp);
                if m.coeff.is_zero() || !is_canonical(&m.coeff) {
                    return false;
                }
            }
            true
        }
    }
}

/// The standalone polynomial equal to variable `x_depth` (`x0` for
/// `depth == 0`, nested one level deeper for each increment) — used to
/// build the substitution list for the composition identities below.
fn variable(depth: usize) -> Poly {
    let mut p = Poly::Composite(vec![Monomial::new(Poly::constant(1), 1)]);
    for _ in 0..depth {
        p = Poly::Composite(vec![Monomial::new(p, 0)]);
    }
    p
}

proptest! {
    #[test]
    fn additive_identity(p in arb_poly()) {
        prop_assert_eq!(&p + &Poly::zero(), p.clone());
        prop_assert_eq!(&Poly::zero() + &p, p);
    }

    #[test]
    fn additive_inverse(p in arb_poly()) {
        prop_assert!((&p + &(-&p)).is_zero());
    }

    #[test]
    fn addition_commutes(p in arb_poly(), q in arb_poly()) {
        prop_assert_eq!(&p + &q, &q + &p);
    }

    #[test]
    fn multiplication_commutes(p in arb_poly(), q in arb_poly()) {
        prop_assert_eq!(&p * &q, &q * &p);
    }

    #[test]
    fn addition_associates(p in arb_poly(), q in arb_poly(), r in arb_poly()) {
        prop_assert_eq!(&(&p + &q) + &r, &p + &(&q + &r));
    }

    #[test]
    fn multiplication_associates(p in arb_poly(), q in arb_poly(), r in arb_poly()) {
        prop_assert_eq!(&(&p * &q) * &r, &p * &(&q * &r));
    }

    #[test]
    fn multiplication_distributes_over_addition(p in arb_poly(), q in arb_poly(), r in arb_poly()) {
        let lhs = &p * &(&q + &r);
        let rhs = &(&p * &q) + &(&p * &r);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn multiplicative_identity(p in arb_poly()) {
        prop_assert_eq!(&p * &Poly::constant(1), p);
    }

    #[test]
    fn zero_annihilates_multiplication(p in arb_poly()) {
        prop_assert!((&p * &Poly::zero()).is_zero());
    }

    #[test]
    fn subtraction_is_add_of_negation(p in arb_poly(), q in arb_poly()) {
        prop_assert_eq!(&p - &q, &p + &(-&q));
    }

    #[test]
    fn kernel_results_stay_canonical(p in arb_poly(), q in arb_poly()) {
        prop_assert!(is_canonical(&(&p + &q)));
        prop_assert!(is_canonical(&(&p * &q)));
        prop_assert!(is_canonical(&(-&p)));
    }

    #[test]
    fn round_trip_through_display_and_parser(p in arb_poly()) {
        prop_assume!(!p.is_zero());
        let printed = format!("{p}\n");
        let parsed = parse_poly(printed.as_bytes()).expect("kernel output must re-parse");
        prop_assert_eq!(parsed, p);
    }

    #[test]
    fn degree_of_product_is_sum_of_degrees(p in arb_poly(), q in arb_poly()) {
        prop_assume!(!p.is_zero() && !q.is_zero());
        prop_assert_eq!((&p * &q).deg(), p.deg() + q.deg());
    }

    #[test]
    fn degree_of_sum_is_bounded_by_the_larger_operand(p in arb_poly(), q in arb_poly()) {
        prop_assert!((&p + &q).deg() <= p.deg().max(q.deg()));
    }

    #[test]
    fn deg_by_never_exceeds_total_degree(p in arb_poly()) {
        for i in 0..4 {
            prop_assert!(p.deg_by(i) <= p.deg());
        }
    }

    #[test]
    fn negation_commutes_with_evaluation(p in arb_poly(), x in -10i64..10) {
        prop_assert_eq!((-&p).at(x), -&p.at(x));
    }

    #[test]
    fn at_zero_extracts_the_constant_term(p in arb_poly()) {
        let expected = match &p {
            Poly::Constant(c) => Poly::Constant(*c),
            Poly::Composite(monos) => monos
                .iter()
                .find(|m| m.exp == 0)
                .map(|m| m.coeff.clone())
                .unwrap_or_else(Poly::zero),
        };
        prop_assert_eq!(p.at(0), expected);
    }

    #[test]
    fn compose_with_its_own_variable_is_identity(q in arb_poly()) {
        prop_assert_eq!(variable(0).compose(&[q.clone()]), q);
    }

    #[test]
    fn compose_with_identity_variables_is_identity(p in arb_poly()) {
        let identities: Vec<Poly> = (0..6).map(variable).collect();
        prop_assert_eq!(p.compose(&identities), p);
    }
}
