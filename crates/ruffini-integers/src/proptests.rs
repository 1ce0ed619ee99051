//! Property-based tests for the scalar types.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, ModInt, Rational};

    const P: u64 = crate::modular::primes::P998244353;

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    proptest! {
        #[test]
        fn integer_division_identity(a in small_int(), b in non_zero_int()) {
            // a = (a / b) * b + a % b
            let a = Integer::new(a);
            let b = Integer::new(b);
            let q = &a / &b;
            let r = &a % &b;
            prop_assert_eq!(q * b + r, a);
        }

        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn rational_sign_normalized(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d);
            prop_assert!(!r.denominator().is_negative());
            prop_assert_eq!(r.signum(), (n.signum() * d.signum()) as i8);
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn rational_division_inverts_multiplication(a in rational(), b in rational()) {
            prop_assume!(!b.is_zero());
            prop_assert_eq!(a.clone() * b.clone() / b, a);
        }

        #[test]
        fn rational_multiplicative_inverse(n in non_zero_int(), d in non_zero_int()) {
            let a = Rational::from_i64(n, d);
            prop_assert!((a.clone() * a.recip()).is_one());
        }

        #[test]
        fn modint_sub_inverts_add(a in 0u64..P, b in 0u64..P) {
            let a = ModInt::<P>::new(a);
            let b = ModInt::<P>::new(b);
            prop_assert_eq!(a + b - b, a);
        }

        #[test]
        fn modint_inverse(a in 1u64..P) {
            let a = ModInt::<P>::new(a);
            let inv = a.inv().expect("non-zero residues are invertible mod a prime");
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn modint_from_signed_matches_negation(a in 0i64..1_000_000) {
            prop_assert_eq!(ModInt::<P>::from_signed(-a), -ModInt::<P>::from_signed(a));
        }
    }
}
