// src/synthesis/general.rs
//
// The no-reduction branch: when the recognized exponent hits none of the
// cyclotomic priority residues, fall back to playing with powers (and, for
// composite bases, individual prime factors) to land on a workable degree.
//
// Homogeneous-Cunningham forms are folded into the same (c1, b, e, c2)
// shape pure Brent forms already have: N | b1^e + sign*b2^e is exactly
// N | 1*b1^e + (sign*b2^e), so `sign*b2^e` becomes a concrete (if large)
// constant term. This sidesteps a homogeneous-specific rational-side
// construction the degree-forcing branches below have no real need for.

use std::rc::Rc;

use log::debug;
use num::BigInt;

use crate::core::candidate::Candidate;
use crate::core::form::FormDescriptor;
use crate::core::poly_pair::{PolyPair, Side};
use crate::integer_math::small_primes::factorize_small_base;
use crate::synthesis::reductions::log10_bigint;

const DEGREES: [usize; 3] = [4, 5, 6];

struct Normalized {
    c1: BigInt,
    b: BigInt,
    e: u32,
    c2: BigInt,
}

fn normalize(form: &FormDescriptor) -> Option<Normalized> {
    match form {
        FormDescriptor::Brent { c1, b1, e1, c2 } => Some(Normalized {
            c1: c1.clone(),
            b: b1.clone(),
            e: *e1,
            c2: c2.clone(),
        }),
        FormDescriptor::HomogeneousCunningham { sign, b1, e1, b2, e2 } => Some(Normalized {
            c1: BigInt::from(1),
            b: b1.clone(),
            e: *e1,
            c2: BigInt::from(*sign) * b2.pow(*e2),
        }),
        FormDescriptor::None => None,
    }
}

/// Produces the no-reduction candidate family for a recognized form:
/// exact-fit, round-up, round-down, and (for composite bases) per-factor
/// rebalanced variants, for each target degree in {4, 5, 6}.
pub fn synthesize_no_reduction(form: &FormDescriptor, n: &Rc<BigInt>) -> Vec<Candidate> {
    let Some(norm) = normalize(form) else {
        return Vec::new();
    };
    let factors = factorize_small_base(&norm.b);
    let mut out = Vec::new();

    for &d in DEGREES.iter() {
        let d_u32 = d as u32;
        if norm.e % d_u32 == 0 {
            out.push(exact_fit(&norm, d, n, form));
            continue;
        }

        out.push(round_up(&norm, d, n, form));
        out.push(round_down(&norm, d, n, form));

        if let Some(factors) = &factors {
            if factors.len() > 1 {
                out.extend(composite_rebalance(&norm, d, factors, n, form));
            }
        }
    }

    debug!("no-reduction synthesis produced {} candidates", out.len());
    out
}

fn make_candidate(
    c_high: BigInt,
    c_low: BigInt,
    d: usize,
    m: BigInt,
    skew: f64,
    difficulty: f64,
    n: &Rc<BigInt>,
    form: &FormDescriptor,
) -> Candidate {
    let mut alg = vec![BigInt::from(0); d + 1];
    alg[0] = c_low;
    alg[d] = c_high;
    let rat = [m.clone(), BigInt::from(-1)];
    let poly = PolyPair::new(alg, rat, m, skew, Side::Rational);
    Candidate::new(n.clone(), form.clone(), poly, difficulty)
}

fn exact_fit(norm: &Normalized, d: usize, n: &Rc<BigInt>, form: &FormDescriptor) -> Candidate {
    let me = norm.e / d as u32;
    let m = norm.b.pow(me);
    let difficulty = log10_bigint(&m) * d as f64;
    make_candidate(norm.c1.clone(), norm.c2.clone(), d, m, 1.0, difficulty, n, form)
}

fn round_up(norm: &Normalized, d: usize, n: &Rc<BigInt>, form: &FormDescriptor) -> Candidate {
    let inc = d as u32 - (norm.e % d as u32);
    let me = (norm.e + inc) / d as u32;
    let m = norm.b.pow(me);
    let cd = &norm.c1; // b2 == 1 once homogeneous forms are folded in.
    let c0 = norm.b.pow(inc) * &norm.c2;
    let skew = skew_from(&c0, cd, d);
    let difficulty = log10_bigint(&m) * d as f64;
    make_candidate(cd.clone(), c0, d, m, skew, difficulty, n, form)
}

fn round_down(norm: &Normalized, d: usize, n: &Rc<BigInt>, form: &FormDescriptor) -> Candidate {
    let inc = norm.e % d as u32;
    let me = (norm.e - inc) / d as u32;
    let m = norm.b.pow(me);
    let cd = norm.b.pow(inc) * &norm.c1;
    let c0 = norm.c2.clone(); // b2 == 1 once homogeneous forms are folded in.
    let skew = skew_from(&c0, &cd, d);
    let difficulty = log10_bigint(&m) * d as f64 + log10_bigint(&cd);
    make_candidate(cd, c0, d, m, skew, difficulty, n, form)
}

fn composite_rebalance(norm: &Normalized, d: usize, factors: &[BigInt], n: &Rc<BigInt>, form: &FormDescriptor) -> Vec<Candidate> {
    let d_u32 = d as u32;
    let i1 = d_u32 - (norm.e % d_u32);
    let i2 = norm.e % d_u32;
    let mut out = Vec::with_capacity(factors.len());

    for (j, fj) in factors.iter().enumerate() {
        let c0 = fj.pow(i1) * &norm.c2;
        let mut cd = norm.c1.clone();
        let mut bb = BigInt::from(1);
        for (k, fk) in factors.iter().enumerate() {
            if k == j {
                continue;
            }
            cd *= fk.pow(i2);
            bb *= fk;
        }
        let me_up = (norm.e + i1) / d_u32;
        let me_down = (norm.e - i2) / d_u32;
        let m = fj.pow(me_up) * bb.pow(me_down);
        let skew = skew_from(&c0, &cd, d);
        let difficulty = log10_bigint(&m) * d as f64 + log10_bigint(&cd);
        out.push(make_candidate(cd, c0, d, m, skew, difficulty, n, form));
    }
    out
}

fn skew_from(c0: &BigInt, cd: &BigInt, d: usize) -> f64 {
    let ratio = log10_bigint(c0) - log10_bigint(cd);
    10f64.powf(ratio / d as f64)
}
