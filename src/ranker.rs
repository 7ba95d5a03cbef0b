// src/ranker.rs
//
// Scales each candidate's difficulty by its norm imbalance, then sorts.
// Uses a true total-order float comparison; the donor algorithm's sort
// comparator truncated floating-point differences to `int`, which
// silently treated any two candidates within 1.0 of each other as tied.

use log::info;

use crate::core::candidate::Candidate;
use crate::core::poly_pair::Side;

/// Scales, sorts, and ranks `candidates` in place (ascending by scaled
/// difficulty — lower is better).
pub fn rank(candidates: &mut Vec<Candidate>) {
    for candidate in candidates.iter_mut() {
        scale_difficulty(candidate);
    }
    candidates.sort_by(|a, b| a.sdifficulty.total_cmp(&b.sdifficulty));
    for (i, candidate) in candidates.iter_mut().enumerate() {
        candidate.rank = i;
    }
    if let Some(best) = candidates.first() {
        info!(
            "ranked {} candidates, best sdifficulty={:.2}",
            candidates.len(),
            best.sdifficulty
        );
    }
}

fn scale_difficulty(candidate: &mut Candidate) {
    let (hi, lo) = if candidate.anorm > candidate.rnorm {
        (candidate.anorm, candidate.rnorm)
    } else {
        (candidate.rnorm, candidate.anorm)
    };
    let ratio = if lo > 0.0 { hi / lo } else { f64::INFINITY };
    let penalty = (ratio.log10() - 6.0).max(0.0);
    candidate.sdifficulty = candidate.difficulty + penalty;
}

/// The side that would carry special-q for this candidate, as determined
/// by the ranker's own norm comparison (matches [`Candidate::sieve_side`]).
pub fn sieve_side(candidate: &Candidate) -> Side {
    candidate.sieve_side()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use num::BigInt;
    use crate::core::form::FormDescriptor;
    use crate::core::poly_pair::{PolyPair, Side as PairSide};

    fn make_candidate(difficulty: f64, anorm: f64, rnorm: f64) -> Candidate {
        let n = Rc::new(BigInt::from(15));
        let poly = PolyPair::new(
            vec![BigInt::from(1)],
            [BigInt::from(0), BigInt::from(1)],
            BigInt::from(1),
            1.0,
            PairSide::Rational,
        );
        let mut c = Candidate::new(n, FormDescriptor::None, poly, difficulty);
        c.anorm = anorm;
        c.rnorm = rnorm;
        c
    }

    #[test]
    fn balanced_norms_incur_no_penalty() {
        let mut candidates = vec![make_candidate(100.0, 10.0, 10.0)];
        rank(&mut candidates);
        assert_eq!(candidates[0].sdifficulty, 100.0);
    }

    #[test]
    fn imbalanced_norms_add_penalty_above_six_orders_of_magnitude() {
        let mut candidates = vec![make_candidate(198.0, 1e8, 1.0)];
        rank(&mut candidates);
        assert!((candidates[0].sdifficulty - 200.0).abs() < 1e-9);
    }

    #[test]
    fn sorts_ascending_by_scaled_difficulty_and_assigns_ranks() {
        let mut candidates = vec![
            make_candidate(200.0, 10.0, 10.0),
            make_candidate(198.0, 1e8, 1.0),
            make_candidate(150.0, 5.0, 5.0),
        ];
        rank(&mut candidates);
        assert_eq!(candidates[0].rank, 0);
        assert!(candidates[0].sdifficulty <= candidates[1].sdifficulty);
        assert!(candidates[1].sdifficulty <= candidates[2].sdifficulty);
    }

    #[test]
    fn sieve_side_reflects_larger_norm() {
        let c = make_candidate(1.0, 5.0, 10.0);
        assert_eq!(sieve_side(&c), Side::Rational);
    }
}
