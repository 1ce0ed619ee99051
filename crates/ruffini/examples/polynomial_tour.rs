//! Polynomial Arithmetic Tour
//!
//! Walks through construction, arithmetic, evaluation, composition,
//! division and GCD over Q and a prime field.
//!
//! Run with: cargo run --example polynomial_tour

use ruffini::prelude::*;

// Helper to create dense polynomials over Q
fn poly_q(coeffs: &[i64]) -> Polynomial<Q> {
    coeffs.iter().map(|&n| Q::from_integer(n)).collect()
}

fn main() -> Result<(), PolyError> {
    println!("Ruffini: dense univariate polynomials\n");

    arithmetic();
    division()?;
    gcd()?;
    prime_field()?;

    Ok(())
}

fn arithmetic() {
    println!("-- arithmetic --");
    let p = poly_q(&[-1, 2]);
    let r = poly_q(&[1, 0, 1]);

    println!("p = {p}");
    println!("r = {r}");
    println!("p + r = {}", &p + &r);
    println!("p - r = {}", &p - &r);
    println!("p * r = {}", &p * &r);
    println!("3 * p = {}", Q::from_integer(3) * &p);
    println!("r(p(x)) = {}", r.compose(&p));
    println!("r(1/2) = {}\n", r.eval(&Q::new(1, 2)));
}

fn division() -> Result<(), PolyError> {
    println!("-- division --");
    let a = poly_q(&[5, 2, 0, 1]);
    let b = poly_q(&[-1, 2]);
    let (quot, rem) = a.div_rem(&b)?;

    println!("({a}) / ({b}) = {quot}, remainder {rem}");

    match a.div_rem(&Polynomial::zero()) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("dividing by zero: {e}\n"),
    }
    Ok(())
}

fn gcd() -> Result<(), PolyError> {
    println!("-- gcd --");
    // (x - 1)(x + 2) and 3(x - 1)(x - 3)
    let a = poly_q(&[-1, 1]) * poly_q(&[2, 1]);
    let b = Q::from_integer(3) * (poly_q(&[-1, 1]) * poly_q(&[-3, 1]));
    println!("gcd({a}, {b}) = {}", monic_gcd_reduce(&a, &b)?);

    let coprime = monic_gcd_reduce(&poly_q(&[1, 0, 1]), &poly_q(&[0, 1]))?;
    println!("gcd(x^2+1, x) = {coprime}\n");
    Ok(())
}

fn prime_field() -> Result<(), PolyError> {
    type F7 = FiniteField<7>;

    println!("-- GF(7) --");
    let a: Polynomial<F7> = [6, 0, 1].into_iter().map(F7::new).collect();
    let b: Polynomial<F7> = [1, 2, 1].into_iter().map(F7::new).collect();
    println!("gcd({a}, {b}) = {}", a.gcd(&b)?);
    println!("({a})' = {}", a.derivative());
    Ok(())
}
