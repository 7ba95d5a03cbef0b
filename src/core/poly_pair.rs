// src/core/poly_pair.rs

use num::{BigInt, Zero};

/// Which side of the pair carries special-q during lattice sieving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Rational,
    Algebraic,
}

/// An NFS polynomial pair sharing a common root `m` modulo N.
///
/// `alg` is stored lowest-degree-first (`alg[0]` is the constant term);
/// `rat` is always linear, `rat[0] + rat[1]*x`.
#[derive(Debug, Clone)]
pub struct PolyPair {
    pub alg: Vec<BigInt>,
    pub rat: [BigInt; 2],
    pub m: BigInt,
    pub skew: f64,
    pub side: Side,
}

impl PolyPair {
    pub fn new(alg: Vec<BigInt>, rat: [BigInt; 2], m: BigInt, skew: f64, side: Side) -> Self {
        PolyPair { alg, rat, m, skew, side }
    }

    pub fn degree(&self) -> usize {
        let mut d = self.alg.len().saturating_sub(1);
        while d > 0 && self.alg[d].is_zero() {
            d -= 1;
        }
        d
    }

    /// Evaluates the algebraic polynomial at `m` via Horner's scheme, mod N.
    pub fn algebraic_residue(&self, n: &BigInt) -> BigInt {
        horner_mod(&self.alg, &self.m, n)
    }

    /// Evaluates the linear rational polynomial at `m`, mod N.
    pub fn rational_residue(&self, n: &BigInt) -> BigInt {
        let value = &self.rat[1] * &self.m + &self.rat[0];
        value.rem_euclid(n)
    }
}

fn horner_mod(coeffs: &[BigInt], m: &BigInt, n: &BigInt) -> BigInt {
    let mut acc = BigInt::zero();
    for c in coeffs.iter().rev() {
        acc = (&acc * m + c).rem_euclid(n);
    }
    acc
}

trait RemEuclidBig {
    fn rem_euclid(&self, modulus: &BigInt) -> BigInt;
}

impl RemEuclidBig for BigInt {
    fn rem_euclid(&self, modulus: &BigInt) -> BigInt {
        let m = modulus.clone();
        let r = self % &m;
        if r < BigInt::zero() {
            r + m
        } else {
            r
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_ignores_trailing_zero_coefficients() {
        let pair = PolyPair::new(
            vec![BigInt::from(1), BigInt::from(0), BigInt::from(0)],
            [BigInt::from(0), BigInt::from(1)],
            BigInt::from(1),
            1.0,
            Side::Algebraic,
        );
        assert_eq!(pair.degree(), 0);
    }

    #[test]
    fn algebraic_residue_matches_direct_evaluation() {
        // f(x) = x^2 - 1, m = 4, N = 15 -> f(4) = 15 = 0 mod 15
        let pair = PolyPair::new(
            vec![BigInt::from(-1), BigInt::from(0), BigInt::from(1)],
            [BigInt::from(0), BigInt::from(1)],
            BigInt::from(4),
            1.0,
            Side::Algebraic,
        );
        assert_eq!(pair.algebraic_residue(&BigInt::from(15)), BigInt::zero());
    }

    #[test]
    fn rational_residue_matches_linear_evaluation() {
        let pair = PolyPair::new(
            vec![BigInt::from(1)],
            [BigInt::from(-10), BigInt::from(1)],
            BigInt::from(10),
            1.0,
            Side::Rational,
        );
        assert_eq!(pair.rational_residue(&BigInt::from(7)), BigInt::zero());
    }
}
