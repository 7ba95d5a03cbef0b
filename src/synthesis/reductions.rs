// src/synthesis/reductions.rs
//
// Cyclotomic algebraic-factor reductions: when the recognized exponent is
// a multiple of certain small constants (21, 15, 6, 5, 7, 11, 13), the
// degree of the natural polynomial can be cut roughly in half by dividing
// out a known algebraic factor (b^k ± 1). Exactly one reduction fires per
// form, chosen by priority.

use std::rc::Rc;

use log::debug;
use num::{BigInt, Signed};

use crate::core::candidate::Candidate;
use crate::core::form::FormDescriptor;
use crate::core::poly_pair::{PolyPair, Side};
use crate::integer_math::gcd::GCD;

/// A reduction's shape: how many algebraic coefficients it has and whether
/// the construction is the "halved-degree" family (15/21/11/13) or the
/// "straight" family (6/5/7).
#[derive(Clone, Copy)]
enum Shape {
    Halved,
    Straight,
}

struct Reduction {
    r: u32,
    deg: usize,
    shape: Shape,
}

const PRIORITY: &[Reduction] = &[
    Reduction { r: 21, deg: 6, shape: Shape::Halved },
    Reduction { r: 15, deg: 4, shape: Shape::Halved },
    // r = 6 is handled specially below (even vs. odd k subcases).
    Reduction { r: 5, deg: 4, shape: Shape::Straight },
    Reduction { r: 7, deg: 6, shape: Shape::Straight },
    Reduction { r: 11, deg: 5, shape: Shape::Halved },
    Reduction { r: 13, deg: 6, shape: Shape::Halved },
];

/// Attempts the cyclotomic reduction for a recognized form. Returns `None`
/// when the exponent hits no priority residue, signalling the caller to
/// fall back to the no-reduction synthesizer.
pub fn try_reduction(form: &FormDescriptor, n: &Rc<BigInt>) -> Option<Candidate> {
    match form {
        FormDescriptor::Brent { c1, b1, e1, c2 } => {
            if *c1 != BigInt::from(1) {
                return None;
            }
            try_reduction_pure(*e1, b1, c2, n, form)
        }
        FormDescriptor::HomogeneousCunningham { sign, b1, e1, b2, .. } => {
            try_reduction_homogeneous(*e1, *sign, b1, b2, n, form)
        }
        FormDescriptor::None => None,
    }
}

fn try_reduction_pure(e: u32, b: &BigInt, sigma: &BigInt, n: &Rc<BigInt>, form: &FormDescriptor) -> Option<Candidate> {
    if e % 21 == 0 {
        return build_pure(21, e / 21, 6, Shape::Halved, b, sigma, n, form);
    }
    if e % 15 == 0 {
        return build_pure(15, e / 15, 4, Shape::Halved, b, sigma, n, form);
    }
    if e % 6 == 0 {
        return build_pure_six_even(e / 6, b, sigma, n, form);
    }
    if e % 6 == 3 {
        return build_pure_six_odd(e / 3, b, sigma, n, form);
    }
    if e % 5 == 0 {
        return build_pure(5, e / 5, 4, Shape::Straight, b, sigma, n, form);
    }
    if e % 7 == 0 {
        return build_pure(7, e / 7, 6, Shape::Straight, b, sigma, n, form);
    }
    if e % 11 == 0 {
        return build_pure(11, e / 11, 5, Shape::Halved, b, sigma, n, form);
    }
    if e % 13 == 0 {
        return build_pure(13, e / 13, 6, Shape::Halved, b, sigma, n, form);
    }
    None
}

fn try_reduction_homogeneous(
    e: u32,
    sign: i32,
    b1: &BigInt,
    b2: &BigInt,
    n: &Rc<BigInt>,
    form: &FormDescriptor,
) -> Option<Candidate> {
    if sign < 0 {
        // The cyclotomic identities below exploit b1^k + b2^k; the minus
        // case has no counterpart among these reductions.
        return None;
    }
    for red in PRIORITY {
        if e % red.r == 0 {
            return build_homogeneous(red.r, e / red.r, red.deg, red.shape, b1, b2, n, form);
        }
    }
    None
}

fn algebraic_coeffs_halved(deg: usize, sigma: &BigInt) -> Vec<BigInt> {
    // Lowest-degree-first. Mirrors the table in 4.E.1.
    match deg {
        4 => vec![
            BigInt::from(1),
            -4 * sigma,
            BigInt::from(-4),
            sigma.clone(),
            BigInt::from(1),
        ],
        6 => vec![
            BigInt::from(1),
            8 * sigma,
            BigInt::from(8),
            -6 * sigma,
            BigInt::from(-6),
            sigma.clone(),
            BigInt::from(1),
        ],
        5 => vec![
            -sigma.clone(),
            BigInt::from(3),
            3 * sigma,
            BigInt::from(-4),
            -sigma.clone(),
            BigInt::from(1),
        ],
        _ => unreachable!("halved reductions only target degree 4, 5, or 6"),
    }
}

fn algebraic_coeffs_straight(deg: usize, sigma: &BigInt) -> Vec<BigInt> {
    match deg {
        4 => vec![
            BigInt::from(1),
            BigInt::from(0),
            BigInt::from(-1),
            BigInt::from(0),
            BigInt::from(1),
        ],
        6 => {
            let mut v = Vec::with_capacity(7);
            for i in 0..=6 {
                v.push(if i % 2 == 0 { BigInt::from(1) } else { -sigma.clone() });
            }
            v
        }
        _ => unreachable!("straight reductions only target degree 4 or 6"),
    }
}

fn build_pure(
    r: u32,
    k: u32,
    deg: usize,
    shape: Shape,
    b: &BigInt,
    sigma: &BigInt,
    n: &Rc<BigInt>,
    form: &FormDescriptor,
) -> Option<Candidate> {
    let bk = b.pow(k);
    let (alg, m, rat, difficulty) = match shape {
        Shape::Halved => {
            let inv = GCD::mod_inverse(&bk, n)?;
            let m = (&bk + &inv) % n.as_ref();
            let rat = [bk.pow(2) + BigInt::from(1), -bk.clone()];
            let difficulty = log10_bigint(b) * (2.0 * deg as f64) * k as f64;
            (algebraic_coeffs_halved(deg, sigma), m, rat, difficulty)
        }
        Shape::Straight => {
            let m = bk.clone();
            let rat = [m.clone(), BigInt::from(-1)];
            let difficulty = log10_bigint(b) * deg as f64 * k as f64;
            (algebraic_coeffs_straight(deg, sigma), m, rat, difficulty)
        }
    };
    debug!("pure reduction r={} k={} deg={} fired", r, k, deg);
    let poly = PolyPair::new(alg, rat, m, 1.0, Side::Rational);
    Some(Candidate::new(n.clone(), form.clone(), poly, difficulty))
}

fn build_pure_six_even(k: u32, b: &BigInt, sigma: &BigInt, n: &Rc<BigInt>, form: &FormDescriptor) -> Option<Candidate> {
    let _ = sigma;
    let bk = b.pow(k);
    let alg = vec![
        BigInt::from(1),
        BigInt::from(0),
        BigInt::from(-1),
        BigInt::from(0),
        BigInt::from(1),
    ];
    let rat = [bk.clone(), BigInt::from(-1)];
    let difficulty = log10_bigint(b) * 4.0 * k as f64;
    let poly = PolyPair::new(alg, rat, bk, 1.0, Side::Rational);
    Some(Candidate::new(n.clone(), form.clone(), poly, difficulty))
}

fn build_pure_six_odd(k: u32, b: &BigInt, sigma: &BigInt, n: &Rc<BigInt>, form: &FormDescriptor) -> Option<Candidate> {
    // e mod 6 == 3: k = e/3 is odd.
    let alg = vec![
        BigInt::from(1),
        BigInt::from(0),
        -(b * sigma),
        BigInt::from(0),
        b.pow(2),
    ];
    let m = b.pow(k);
    let rat = [m.clone(), BigInt::from(-1)];
    let skew = 10f64.powf(-0.5 * log10_bigint(b));
    let difficulty = log10_bigint(b) * 4.0 * k as f64;
    let poly = PolyPair::new(alg, rat, m, skew, Side::Rational);
    Some(Candidate::new(n.clone(), form.clone(), poly, difficulty))
}

fn build_homogeneous(
    r: u32,
    k: u32,
    deg: usize,
    shape: Shape,
    b1: &BigInt,
    b2: &BigInt,
    n: &Rc<BigInt>,
    form: &FormDescriptor,
) -> Option<Candidate> {
    let b1k = b1.pow(k);
    let b2k = b2.pow(k);
    // Homogeneous reductions use a fixed sigma of +1 (the plus-sign
    // identity b1^k + b2^k is what makes the cyclotomic factor available).
    let sigma = BigInt::from(1);
    let (alg, m, rat, difficulty) = match shape {
        Shape::Halved => {
            let inv = GCD::mod_inverse(&b2k, n)?;
            let m = (&b1k * &inv) % n.as_ref();
            let rat = [b1k.pow(2) + b2k.pow(2), -(b1.clone() * b2).pow(k)];
            let difficulty = log10_bigint(b1) * (2.0 * deg as f64) * k as f64;
            (algebraic_coeffs_halved(deg, &sigma), m, rat, difficulty)
        }
        Shape::Straight => {
            let pre_m = b1k.clone();
            let inv = GCD::mod_inverse(&b2k, n)?;
            let m = (&b1k * &inv) % n.as_ref();
            let rat = [pre_m, -b2k.clone()];
            let difficulty = log10_bigint(b1) * deg as f64 * k as f64;
            (algebraic_coeffs_straight(deg, &sigma), m, rat, difficulty)
        }
    };
    debug!("homogeneous reduction r={} k={} deg={} fired", r, k, deg);
    let poly = PolyPair::new(alg, rat, m, 1.0, Side::Rational);
    Some(Candidate::new(n.clone(), form.clone(), poly, difficulty))
}

/// log10 of a possibly-huge BigInt. For values that fit in an `f64`,
/// computes directly; for larger values, approximates from the decimal
/// digit count plus the leading digits, the same trick the norm estimator
/// uses to keep arbitrarily large integers in range for f64 math.
pub fn log10_bigint(b: &BigInt) -> f64 {
    use num::ToPrimitive;
    let b = b.abs();
    if let Some(f) = b.to_f64() {
        if f > 0.0 {
            return f.log10();
        }
    }
    let s = b.to_string();
    let digits = s.len();
    let lead_len = digits.min(17);
    let lead: f64 = s[..lead_len].parse().unwrap_or(1.0);
    lead.log10() + (digits - lead_len) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn r15_reduction_builds_degree_four_candidate() {
        // N = 3^165 - 1, e = 165 = 15 * 11.
        let n = Rc::new(BigInt::from(3).pow(165) - BigInt::from(1));
        let form = FormDescriptor::Brent {
            c1: BigInt::from(1),
            b1: BigInt::from(3),
            e1: 165,
            c2: BigInt::from(-1),
        };
        let candidate = try_reduction(&form, &n).expect("r=15 reduction should fire");
        // sigma = c2 = -1: algebraic_coeffs_halved(4, -1) = [1, -4*-1, -4, -1, 1].
        assert_eq!(
            candidate.poly.alg,
            vec![BigInt::from(1), BigInt::from(4), BigInt::from(-4), BigInt::from(-1), BigInt::from(1)]
        );
        assert_eq!(candidate.form, form);
    }

    #[test]
    fn no_reduction_fires_for_an_exponent_matching_no_priority_residue() {
        // e = 4 matches none of 21, 15, 6, 5, 7, 11, 13 (4 mod 6 == 4, not
        // 0 or 3 either); the no-reduction synthesizer is expected to
        // handle this exponent instead.
        let n = Rc::new(BigInt::from(6).pow(4) - BigInt::from(1));
        let form = FormDescriptor::Brent {
            c1: BigInt::from(1),
            b1: BigInt::from(6),
            e1: 4,
            c2: BigInt::from(-1),
        };
        assert!(try_reduction(&form, &n).is_none());
    }

    #[test]
    fn r6_reduction_fires_when_exponent_divisible_by_six() {
        let n = Rc::new(BigInt::from(10).pow(120) + BigInt::from(1));
        let form = FormDescriptor::Brent {
            c1: BigInt::from(1),
            b1: BigInt::from(10),
            e1: 120,
            c2: BigInt::from(1),
        };
        let candidate = try_reduction(&form, &n).expect("r=6 reduction should fire for e=120");
        assert_eq!(candidate.poly.alg, vec![
            BigInt::from(1),
            BigInt::from(0),
            BigInt::from(-1),
            BigInt::from(0),
            BigInt::from(1),
        ]);
        assert_eq!(candidate.form, form);
    }
}
