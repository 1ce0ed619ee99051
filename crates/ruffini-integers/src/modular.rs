//! Integers modulo a compile-time modulus.

use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// An integer modulo `P`.
///
/// Every non-zero residue is invertible only when `P` is prime; for a
/// composite modulus [`ModInt::inv`] returns `None` on zero divisors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ModInt<const P: u64>(u64);

impl<const P: u64> ModInt<P> {
    /// Creates a residue, reducing `value` modulo `P`.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value % P)
    }

    /// Creates a residue from a signed value.
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        let r = value.unsigned_abs() % P;
        if value < 0 && r != 0 {
            Self(P - r)
        } else {
            Self(r)
        }
    }

    /// Returns the canonical representative in `0..P`.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Computes the inverse with the extended Euclidean algorithm.
    ///
    /// Returns `None` when `gcd(self, P) != 1`.
    #[must_use]
    pub fn inv(self) -> Option<Self> {
        if self.0 == 0 {
            return None;
        }

        let (mut t, mut new_t) = (0i128, 1i128);
        let (mut r, mut new_r) = (i128::from(P), i128::from(self.0));

        while new_r != 0 {
            let q = r / new_r;
            (t, new_t) = (new_t, t - q * new_t);
            (r, new_r) = (new_r, r - q * new_r);
        }

        if r > 1 {
            return None;
        }

        let t = t.rem_euclid(i128::from(P));
        u64::try_from(t).ok().map(Self)
    }

    /// Computes self^exp by binary exponentiation.
    #[must_use]
    pub fn pow(self, mut exp: u64) -> Self {
        let mut base = self;
        let mut result = Self::one();

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            exp >>= 1;
        }

        result
    }

    fn reduce(wide: u128) -> Self {
        // The remainder is below P, so it always fits.
        #[allow(clippy::cast_possible_truncation)]
        Self((wide % u128::from(P)) as u64)
    }
}

impl<const P: u64> Zero for ModInt<P> {
    fn zero() -> Self {
        Self(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl<const P: u64> One for ModInt<P> {
    fn one() -> Self {
        Self::new(1)
    }

    fn is_one(&self) -> bool {
        *self == Self::one()
    }
}

impl<const P: u64> fmt::Debug for ModInt<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.0, P)
    }
}

impl<const P: u64> fmt::Display for ModInt<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<const P: u64> Add for ModInt<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::reduce(u128::from(self.0) + u128::from(rhs.0))
    }
}

impl<const P: u64> Sub for ModInt<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::reduce(u128::from(P) + u128::from(self.0) - u128::from(rhs.0))
    }
}

impl<const P: u64> Mul for ModInt<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::reduce(u128::from(self.0) * u128::from(rhs.0))
    }
}

impl<const P: u64> Div for ModInt<P> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is not invertible modulo `P`.
    fn div(self, rhs: Self) -> Self::Output {
        match rhs.inv() {
            Some(inv) => self * inv,
            None => panic!("{rhs:?} is not invertible"),
        }
    }
}

impl<const P: u64> Neg for ModInt<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.0 == 0 {
            self
        } else {
            Self(P - self.0)
        }
    }
}

impl<const P: u64> From<u64> for ModInt<P> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<const P: u64> From<i64> for ModInt<P> {
    fn from(value: i64) -> Self {
        Self::from_signed(value)
    }
}

/// Commonly used primes.
pub mod primes {
    /// 2^23 * 7 * 17 + 1.
    pub const P998244353: u64 = 998_244_353;

    /// The Mersenne prime 2^61 - 1.
    pub const MERSENNE_61: u64 = (1 << 61) - 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    type Mod7 = ModInt<7>;

    #[test]
    fn test_basic_ops() {
        let a = Mod7::new(5);
        let b = Mod7::new(4);

        assert_eq!((a + b).value(), 2);
        assert_eq!((b - a).value(), 6);
        assert_eq!((a * b).value(), 6);
        assert_eq!((a / b * b), a);
    }

    #[test]
    fn test_inverse() {
        assert_eq!(Mod7::new(3).inv(), Some(Mod7::new(5)));
        assert_eq!(Mod7::new(0).inv(), None);

        // 2 is a zero divisor modulo 6
        assert_eq!(ModInt::<6>::new(2).inv(), None);
        assert_eq!(ModInt::<6>::new(5).inv(), Some(ModInt::<6>::new(5)));
    }

    #[test]
    fn test_pow() {
        let a = Mod7::new(3);
        assert_eq!(a.pow(0).value(), 1);
        assert_eq!(a.pow(2).value(), 2);
        assert_eq!(a.pow(6).value(), 1);
    }

    #[test]
    fn test_large_modulus() {
        type Big = ModInt<{ primes::MERSENNE_61 }>;
        let a = Big::new(primes::MERSENNE_61 - 1);
        assert_eq!((a + a).value(), primes::MERSENNE_61 - 2);
        assert_eq!((a * a).value(), 1);
    }

    #[test]
    fn test_negative() {
        assert_eq!(Mod7::from_signed(-3).value(), 4);
        assert_eq!(Mod7::from_signed(-14).value(), 0);
        assert_eq!((-Mod7::new(0)).value(), 0);
    }
}
