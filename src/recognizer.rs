// src/recognizer.rs
//
// Scans a bounded (base, exponent) grid to detect that N divides a number
// of Brent, pure-power, or homogeneous-Cunningham form.

use log::debug;
use num::{BigInt, One, Signed, Zero};

use crate::config::SnfsConfig;
use crate::core::form::FormDescriptor;
use crate::integer_math::gcd::GCD;

const MIN_BRENT_EXPONENT: u32 = 32;
const MIN_HOMOGENEOUS_EXPONENT: u32 = 20;
const SHIFT: u64 = 1 << 30;

/// Bases below `MAX_BASE` that are themselves perfect powers of a smaller
/// base already covered by the scan; skipping them avoids reporting a
/// redundant, larger-coefficient form for the same N.
const SKIP_BASES: &[u32] = &[4, 8, 9, 16, 25, 27, 32, 36, 49, 64, 81];

/// Runs the full recognition pipeline: Brent/Cunningham scan, then the
/// tail scan for large-base pure powers, then the homogeneous-Cunningham
/// scan. Returns `FormDescriptor::None` if nothing is found within bounds.
pub fn recognize(n: &BigInt, config: &SnfsConfig) -> FormDescriptor {
    if let Some(form) = brent_scan(n, config.max_base, config.bit_limit) {
        debug!("brent scan found form: {}", form.describe());
        return form;
    }
    if let Some(form) = tail_scan(n, config.max_base, config.bit_limit) {
        debug!("tail scan found form: {}", form.describe());
        return form;
    }
    if let Some(form) = homogeneous_scan(n, config.max_base, config.bit_limit) {
        debug!("homogeneous scan found form: {}", form.describe());
        return form;
    }
    FormDescriptor::None
}

fn max_exponent_for_base(base: u32, bit_limit: u32) -> u32 {
    let log2_base = (base as f64).log2();
    (bit_limit as f64 / log2_base) as u32 + 1
}

/// 4.D.1 — for each base, scan exponents for a Brent-form residue that
/// decodes to small (< 2^32) coefficients.
fn brent_scan(n: &BigInt, max_base: u32, bit_limit: u32) -> Option<FormDescriptor> {
    let shift = BigInt::from(SHIFT);
    let two_32 = BigInt::one() << 32u32;

    for base in 2..max_base {
        if SKIP_BASES.contains(&base) {
            continue;
        }
        let b = BigInt::from(base);
        let maxe = max_exponent_for_base(base, bit_limit);
        let mut p = b.pow(MIN_BRENT_EXPONENT);
        for e in MIN_BRENT_EXPONENT..maxe {
            if e > MIN_BRENT_EXPONENT {
                p *= &b;
            }
            let r = (n + &shift).modpow_like(&p);
            if r >= two_32 {
                continue;
            }
            let (c2, sign_positive) = if r > BigInt::from(SHIFT) {
                (&r - BigInt::from(SHIFT), true)
            } else {
                (BigInt::from(SHIFT) - &r, false)
            };
            let adjusted = if sign_positive { n - &c2 } else { n + &c2 };
            let (c1, rem) = adjusted.div_mod_floor_like(&p);
            if !rem.is_zero() {
                continue;
            }
            if c1.abs() >= two_32 {
                continue;
            }
            if (&c1 % &b).is_zero() {
                continue;
            }
            let signed_c2 = if sign_positive { c2 } else { -c2 };
            return Some(FormDescriptor::Brent {
                c1,
                b1: b,
                e1: e,
                c2: signed_c2,
            });
        }
    }
    None
}

/// 4.D.2 — after the main grid, test whether N±1 is itself an exact
/// power with an exponent too large for the base/exponent grid above.
fn tail_scan(n: &BigInt, max_base: u32, bit_limit: u32) -> Option<FormDescriptor> {
    let maxe = max_exponent_for_base(2, bit_limit);
    let _ = max_base;
    for e in (2..maxe).rev() {
        let plus_one = n + BigInt::one();
        if let Some(root) = exact_nth_root(&plus_one, e) {
            return Some(FormDescriptor::Brent {
                c1: BigInt::one(),
                b1: root,
                e1: e,
                c2: BigInt::from(-1),
            });
        }
        let minus_one = n - BigInt::one();
        if let Some(root) = exact_nth_root(&minus_one, e) {
            return Some(FormDescriptor::Brent {
                c1: BigInt::one(),
                b1: root,
                e1: e,
                c2: BigInt::one(),
            });
        }
    }
    None
}

/// 4.D.3 — scan coprime (i, j) base pairs for a homogeneous identity
/// `i^k ± j^k ≡ 0 (mod N)`.
fn homogeneous_scan(n: &BigInt, max_base: u32, bit_limit: u32) -> Option<FormDescriptor> {
    for i in 3..max_base {
        let maxe = max_exponent_for_base(i, bit_limit);
        for j in 2..i {
            if !GCD::are_coprime(&[BigInt::from(i), BigInt::from(j)]) {
                continue;
            }
            let bi = BigInt::from(i);
            let bj = BigInt::from(j);
            for k in MIN_HOMOGENEOUS_EXPONENT..maxe {
                let pi = bi.pow(k);
                let pj = bj.pow(k);
                if ((&pi + &pj) % n).is_zero() {
                    return Some(FormDescriptor::HomogeneousCunningham {
                        sign: 1,
                        b1: bi,
                        e1: k,
                        b2: bj,
                        e2: k,
                    });
                }
                if ((&pi - &pj) % n).is_zero() {
                    return Some(FormDescriptor::HomogeneousCunningham {
                        sign: -1,
                        b1: bi,
                        e1: k,
                        b2: bj,
                        e2: k,
                    });
                }
            }
        }
    }
    None
}

/// Returns the exact integer e-th root of `value` if one exists, else `None`.
fn exact_nth_root(value: &BigInt, e: u32) -> Option<BigInt> {
    if value.is_negative() || e == 0 {
        return None;
    }
    if value.is_zero() {
        return Some(BigInt::zero());
    }
    let root = floor_nth_root(value, e);
    if root.pow(e) == *value {
        Some(root)
    } else {
        None
    }
}

/// Newton's-method integer floor of the e-th root of a non-negative BigInt.
fn floor_nth_root(input: &BigInt, e: u32) -> BigInt {
    if input.is_zero() || input.is_one() || e == 1 {
        return input.clone();
    }
    let input_bits = input.bits();
    let root_bits = (input_bits / e as u64).max(1);
    let mut x = BigInt::one() << root_bits;
    if x.is_zero() {
        x = BigInt::one();
    }
    let e_big = BigInt::from(e);
    let e_minus_1 = BigInt::from(e - 1);

    for _ in 0..1000 {
        let x_pow = x.pow(e - 1);
        if x_pow.is_zero() {
            x = BigInt::one();
            continue;
        }
        let numerator = &e_minus_1 * &x + input / &x_pow;
        let x_next = &numerator / &e_big;
        if x_next == x {
            break;
        }
        let diff = (&x_next - &x).abs();
        if diff == BigInt::one() {
            let smaller = if x < x_next { x.clone() } else { x_next.clone() };
            let larger = if x >= x_next { x } else { x_next };
            if larger.pow(e) <= *input {
                x = larger;
            } else {
                x = smaller;
            }
            break;
        }
        x = x_next;
    }
    while x.pow(e) > *input {
        x -= 1;
    }
    while (&x + 1).pow(e) <= *input {
        x += 1;
    }
    x
}

/// Small helpers kept local to the recognizer: the grid scan needs a
/// remainder that behaves like Euclidean mod (always non-negative) and a
/// floor-division/remainder pair, both phrased against `&BigInt` so the
/// scan reads like the arithmetic it implements.
trait EuclidLike {
    fn modpow_like(&self, modulus: &BigInt) -> BigInt;
    fn div_mod_floor_like(&self, divisor: &BigInt) -> (BigInt, BigInt);
}

impl EuclidLike for BigInt {
    fn modpow_like(&self, modulus: &BigInt) -> BigInt {
        let r = self % modulus;
        if r.is_negative() {
            r + modulus
        } else {
            r
        }
    }

    fn div_mod_floor_like(&self, divisor: &BigInt) -> (BigInt, BigInt) {
        let q = self / divisor;
        let r = self - &q * divisor;
        if r.is_negative() {
            (q - 1, r + divisor)
        } else {
            (q, r)
        }
    }
}
