//! Human-readable rendering of polynomials.
//!
//! Terms are written highest degree first, e.g. `2*x^3-x+1`. Zero terms are
//! skipped, a coefficient of magnitude one is left implicit except on the
//! constant term, and a negative coefficient contributes its sign as the
//! separator.

use std::fmt::{self, Write};

use ruffini_rings::traits::Ring;

use crate::dense::Polynomial;

impl<T> Polynomial<T>
where
    T: Ring + PartialOrd + fmt::Display,
{
    fn write_terms<W: Write>(&self, out: &mut W) -> fmt::Result {
        let coeffs = self.coeffs();
        let top = coeffs.len() - 1;

        if coeffs[top].is_zero() {
            return write!(out, "{}", T::zero());
        }

        for (i, c) in coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }

            let implicit = if *c < T::zero() {
                out.write_char('-')?;
                let implicit = *c == T::neg_one() && i > 0;
                if !implicit {
                    write!(out, "{}", -c.clone())?;
                }
                implicit
            } else {
                if i != top {
                    out.write_char('+')?;
                }
                let implicit = c.is_one() && i > 0;
                if !implicit {
                    write!(out, "{c}")?;
                }
                implicit
            };

            match i {
                0 => {}
                1 if implicit => out.write_char('x')?,
                1 => out.write_str("*x")?,
                _ if implicit => write!(out, "x^{i}")?,
                _ => write!(out, "*x^{i}")?,
            }
        }

        Ok(())
    }
}

impl<T> fmt::Display for Polynomial<T>
where
    T: Ring + PartialOrd + fmt::Display,
{
    /// Honors width, fill and alignment for the whole rendered polynomial.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered = String::new();
        self.write_terms(&mut rendered)?;
        f.pad(&rendered)
    }
}
