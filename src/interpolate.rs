//! Lagrange interpolation over the integers modulo a large prime.
//!
//! For points `(x_i, y_i)` the polynomial of degree at most `k - 1` through
//! them is evaluated at `t` as
//!
//! ```text
//! P(t) = Σ_i y_i · Π_{j≠i} (t - x_j) / (x_i - x_j)   (mod p)
//! ```
//!
//! Division is multiplication by a modular inverse, so every step stays an
//! exact integer. All differences are normalized into `[0, p)` before use.

use crate::error::InterpolationError;
use crate::types::Point;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use std::collections::BTreeSet;

/// The Mersenne prime 2^521 - 1.
pub fn default_prime() -> BigUint {
    (BigUint::one() << 521usize) - 1u32
}

/// Computes `a⁻¹ mod m` with the extended Euclidean algorithm.
///
/// Returns `None` when `gcd(a, m) != 1`. With `m` prime and `a` in `(0, m)`
/// an inverse always exists.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    if m.is_zero() {
        return None;
    }
    let modulus = BigInt::from(m.clone());

    let (mut old_r, mut r) = (BigInt::from(a % m), modulus.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    while !r.is_zero() {
        let quotient = &old_r / &r;
        let next_r = &old_r - &quotient * &r;
        old_r = std::mem::replace(&mut r, next_r);
        let next_s = &old_s - &quotient * &s;
        old_s = std::mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        return None;
    }
    // Bézout coefficient may be negative
    ((old_s % &modulus + &modulus) % &modulus).to_biguint()
}

/// Rejects moduli that cannot define a field: 0 and 1.
pub fn check_modulus(prime: &BigUint) -> Result<(), InterpolationError> {
    if *prime < BigUint::from(2u32) {
        return Err(InterpolationError::InvalidModulus(prime.clone()));
    }
    Ok(())
}

/// `(a - b) mod p` for `a, b` already in `[0, p)`.
fn sub_mod(a: &BigUint, b: &BigUint, prime: &BigUint) -> BigUint {
    (a + prime - b) % prime
}

/// Evaluates the interpolating polynomial through `points` at `target`,
/// reduced modulo `prime`.
///
/// # Errors
/// - [`InterpolationError::InvalidModulus`] if `prime` is below 2.
/// - [`InterpolationError::NoPoints`] if `points` is empty.
/// - [`InterpolationError::DuplicateX`] if two points share an x value.
/// - [`InterpolationError::NotInvertible`] if a denominator has no inverse,
///   which means `prime` is not prime or is too small for the x values.
pub fn interpolate_at(
    points: &[Point],
    target: u64,
    prime: &BigUint,
) -> Result<BigUint, InterpolationError> {
    check_modulus(prime)?;
    if points.is_empty() {
        return Err(InterpolationError::NoPoints);
    }
    let mut seen = BTreeSet::new();
    for point in points {
        if !seen.insert(point.x) {
            return Err(InterpolationError::DuplicateX { x: point.x });
        }
    }

    let target = BigUint::from(target) % prime;
    let xs: Vec<BigUint> = points.iter().map(|p| BigUint::from(p.x) % prime).collect();

    let mut sum = BigUint::zero();
    for (i, point) in points.iter().enumerate() {
        let mut numerator = BigUint::one();
        let mut denominator = BigUint::one();
        for (j, x_j) in xs.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator = numerator * sub_mod(&target, x_j, prime) % prime;
            denominator = denominator * sub_mod(&xs[i], x_j, prime) % prime;
        }

        let inverse = mod_inverse(&denominator, prime)
            .ok_or(InterpolationError::NotInvertible { x: point.x })?;
        let basis = numerator * inverse % prime;
        let term = &point.y % prime * basis % prime;
        sum = (sum + term) % prime;
    }

    Ok(sum)
}

/// Recovers the constant term `P(0) mod prime` of the polynomial through `points`.
pub fn interpolate_at_zero(points: &[Point], prime: &BigUint) -> Result<BigUint, InterpolationError> {
    interpolate_at(points, 0, prime)
}
