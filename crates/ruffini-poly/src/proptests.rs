//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense::Polynomial;
    use crate::{monic_gcd_reduce, PolyError};
    use ruffini_rings::{FiniteField, Ring, Q};

    type F101 = FiniteField<101>;

    fn small_coeff() -> impl Strategy<Value = Q> {
        (-100i64..100i64).prop_map(Q::from_integer)
    }

    // Degree 0-4, including trailing zeros before normalization.
    fn small_poly() -> impl Strategy<Value = Polynomial<Q>> {
        proptest::collection::vec(small_coeff(), 0..=5).prop_map(Polynomial::new)
    }

    fn nonzero_poly() -> impl Strategy<Value = Polynomial<Q>> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    fn prime_field_poly() -> impl Strategy<Value = Polynomial<F101>> {
        proptest::collection::vec((0u64..101).prop_map(F101::new), 1..=6).prop_map(Polynomial::new)
    }

    proptest! {
        #[test]
        fn normalized_leading_coeff(p in small_poly()) {
            prop_assert!(!p.coeffs().is_empty());
            prop_assert!(p.is_zero() || !p.leading_coeff().is_zero());
        }

        #[test]
        fn degree_law(p in small_poly()) {
            if p.is_zero() {
                prop_assert_eq!(p.degree(), -1);
                prop_assert_eq!(p.size(), 1);
            } else {
                prop_assert_eq!(p.degree(), p.size() as isize - 1);
            }
        }

        #[test]
        fn add_identity(a in small_poly()) {
            prop_assert_eq!(&a + &Polynomial::zero(), a.clone());
            prop_assert_eq!(&Polynomial::zero() + &a, a);
        }

        #[test]
        fn add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        }

        #[test]
        fn distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
            prop_assert_eq!((&a * &b).degree(), a.degree() + b.degree());
        }

        #[test]
        fn sub_is_add_neg(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a - &b, &a + &(-&b));
        }

        #[test]
        fn eval_additive(a in small_poly(), b in small_poly(), x in small_coeff()) {
            prop_assert_eq!((&a + &b).eval(&x), a.eval(&x) + b.eval(&x));
        }

        #[test]
        fn eval_multiplicative(a in small_poly(), b in small_poly(), x in small_coeff()) {
            prop_assert_eq!((&a * &b).eval(&x), a.eval(&x) * b.eval(&x));
        }

        #[test]
        fn eval_matches_power_sum(a in small_poly(), x in small_coeff()) {
            let naive = a
                .iter()
                .zip(0u32..)
                .fold(Q::zero(), |acc, (c, i)| acc + c.clone() * x.pow(i));
            prop_assert_eq!(a.eval(&x), naive);
        }

        #[test]
        fn compose_evaluates_nested(a in small_poly(), b in small_poly(), x in small_coeff()) {
            prop_assert_eq!(a.compose(&b).eval(&x), a.eval(&b.eval(&x)));
        }

        #[test]
        fn division_identity(a in small_poly(), d in nonzero_poly()) {
            let (quot, rem) = a.div_rem(&d).unwrap();
            prop_assert_eq!(&(&quot * &d) + &rem, a.clone());
            prop_assert!(rem.degree() < d.degree());
            prop_assert_eq!(&a / &d, quot);
            prop_assert_eq!(&a % &d, rem);
        }

        #[test]
        fn remainder_matches_difference(a in small_poly(), d in nonzero_poly()) {
            prop_assert_eq!(&a % &d, &a - &(&(&a / &d) * &d));
        }

        #[test]
        fn division_by_zero_rejected(a in small_poly()) {
            prop_assert_eq!(a.div_rem(&Polynomial::zero()), Err(PolyError::DivisionByZero));
        }

        #[test]
        fn gcd_divides_both(a in nonzero_poly(), b in nonzero_poly()) {
            let g = monic_gcd_reduce(&a, &b).unwrap();
            prop_assert!(g.leading_coeff().is_one());
            prop_assert!((&a % &g).is_zero());
            prop_assert!((&b % &g).is_zero());
        }

        #[test]
        fn gcd_of_multiple_is_monic_form(a in nonzero_poly(), b in nonzero_poly()) {
            let multiple = &a * &b;
            prop_assert_eq!(monic_gcd_reduce(&a, &multiple).unwrap(), a.make_monic().unwrap());
        }

        #[test]
        fn prime_field_division_identity(a in prime_field_poly(), d in prime_field_poly()) {
            prop_assume!(!d.is_zero());
            let (quot, rem) = a.div_rem(&d).unwrap();
            prop_assert_eq!(&(&quot * &d) + &rem, a);
            prop_assert!(rem.degree() < d.degree());
        }

        #[test]
        fn display_omits_trivial_terms(p in nonzero_poly()) {
            let s = p.to_string();
            prop_assert!(!s.starts_with('+'));
            prop_assert!(!s.contains("x^1") && !s.contains("x^0"));
            prop_assert!(!s.contains("+-"));
            prop_assert!(!s.starts_with("1*") && !s.contains("+1*") && !s.contains("-1*"));
        }
    }
}
