// src/norms.rs
//
// Approximates per-side sieving norms from a candidate's skew and
// coefficients. The constant 1e6 is arbitrary but shared between both
// sides so their ratio stays meaningful.

use num::{BigInt, ToPrimitive};

use crate::core::candidate::Candidate;

const NORM_SCALE: f64 = 1_000_000.0;

/// Estimates `anorm` and `rnorm` for `candidate` and writes them in place.
pub fn estimate_norms(candidate: &mut Candidate) {
    let skew_sqrt = candidate.poly.skew.sqrt();
    let a = skew_sqrt * NORM_SCALE;
    let b = NORM_SCALE / skew_sqrt;

    let deg = candidate.poly.degree();
    let mut anorm = 0.0;
    let ratio = a / b;
    for (i, c) in candidate.poly.alg.iter().enumerate() {
        anorm += approx_f64(c).abs() * ratio.powi(i as i32);
    }
    anorm *= b.powi(deg as i32);

    let rnorm = approx_f64(&candidate.poly.rat[1]).abs() * a + approx_f64(&candidate.poly.rat[0]).abs() * b;

    candidate.anorm = anorm;
    candidate.rnorm = rnorm;
}

/// Converts a `BigInt` to `f64`, saturating to infinity instead of
/// panicking when the value overflows the `f64` range.
fn approx_f64(value: &BigInt) -> f64 {
    value.to_f64().unwrap_or_else(|| {
        if *value < BigInt::from(0) {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    })
}
