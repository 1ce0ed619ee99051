//! Property-based tests for the coefficient types.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Field, FiniteField, Ring, Q, Z};

    type F97 = FiniteField<97>;

    fn rational() -> impl Strategy<Value = Q> {
        (-50i64..50, prop_oneof![(-20i64..=-1), (1i64..=20)]).prop_map(|(n, d)| Q::new(n, d))
    }

    fn residue() -> impl Strategy<Value = F97> {
        (0u64..97).prop_map(F97::new)
    }

    proptest! {
        #[test]
        fn q_inverse_law(a in rational()) {
            match a.inv() {
                Some(inv) => prop_assert!((a * inv).is_one()),
                None => prop_assert!(a.is_zero()),
            }
        }

        #[test]
        fn q_division_matches_inverse(a in rational(), b in rational()) {
            prop_assume!(!b.is_zero());
            prop_assert_eq!(a.clone() / b.clone(), a * b.inv().unwrap());
        }

        #[test]
        fn prime_field_inverse_law(a in residue()) {
            prop_assume!(!a.is_zero());
            prop_assert!((a * a.inv().unwrap()).is_one());
        }

        #[test]
        fn prime_field_fermat(a in residue()) {
            prop_assume!(!a.is_zero());
            prop_assert!(a.pow(96).is_one());
        }

        #[test]
        fn neg_one_is_additive_inverse_of_one(a in residue(), n in -1000i64..1000) {
            prop_assert!((F97::one() + F97::neg_one()).is_zero());
            prop_assert_eq!(Z::new(n) * Z::neg_one(), -Z::new(n));
            prop_assert_eq!(a * F97::neg_one(), -a);
        }

        #[test]
        fn z_division_truncates(a in -1000i64..1000, b in prop_oneof![(-50i64..=-1), (1i64..=50)]) {
            let (za, zb) = (Z::new(a), Z::new(b));
            prop_assert_eq!(za.clone() / zb.clone(), Z::new(a / b));
            prop_assert_eq!(za % zb, Z::new(a % b));
        }
    }
}
