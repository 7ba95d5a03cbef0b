// src/validator.rs
//
// Confirms a synthesized candidate actually has a common root of N before
// it is allowed to compete in ranking.

use num::Zero;

use crate::core::candidate::Candidate;

/// Validates `candidate` in place: sets `valid` and returns it by value so
/// callers can chain `.filter(Candidate::valid)`-style pipelines.
pub fn validate(mut candidate: Candidate) -> Candidate {
    let n = candidate.n.clone();
    let alg_ok = candidate.poly.algebraic_residue(&n).is_zero();
    let rat_ok = candidate.poly.rational_residue(&n).is_zero();
    candidate.valid = alg_ok && rat_ok;
    candidate
}
