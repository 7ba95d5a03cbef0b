// tests/end_to_end_tests.rs
//
// End-to-end integration tests for the full polynomial-selection pipeline:
// recognize -> synthesize -> validate -> estimate norms -> rank.

use num::BigInt;
use snfs_poly::config::SnfsConfig;
use snfs_poly::core::candidate::Candidate;
use snfs_poly::core::form::FormDescriptor;
use snfs_poly::core::poly_pair::{PolyPair, Side};
use snfs_poly::engine;
use snfs_poly::ranker;
use snfs_poly::recognizer;

#[cfg(test)]
mod end_to_end_tests {
    use super::*;

    #[test]
    fn mersenne_like_n_is_recognized_via_tail_scan_and_rounded_to_degree_six() {
        // N = 2^256 - 1: 2 is below the Brent scan's base range but the
        // tail scan catches it directly as a pure power.
        let n = (BigInt::from(1) << 256u32) - BigInt::from(1);
        let config = SnfsConfig::default();
        let candidates = engine::select_polynomials(&n, &config);
        assert!(!candidates.is_empty());

        let degree_six = candidates
            .iter()
            .find(|c| c.poly.degree() == 6)
            .expect("a degree-6 round-up candidate should be present");
        // 256 is not divisible by 6: me = ceil(256/6) = 43, inc = 2.
        // b2 == 1 once homogeneous forms are folded in, so cd = 1^2 * 1 = 1.
        assert_eq!(degree_six.poly.m, BigInt::from(2).pow(43));
        assert_eq!(degree_six.poly.alg[6], BigInt::from(1));
        assert_eq!(degree_six.poly.alg[0], BigInt::from(-4));

        // The recognized form must survive into the candidate record, not
        // just the recognizer's return value, since the output writer and
        // the winning-candidate log line both read it off the candidate.
        assert_eq!(degree_six.form.describe(), "2^256-1");
    }

    #[test]
    fn cyclotomic_r15_reduction_produces_a_single_degree_four_candidate() {
        // N = 3^165 - 1, e = 165 = 15 * 11: the r=15 reduction fires and
        // is the only candidate synthesized for this form.
        let n = BigInt::from(3).pow(165) - BigInt::from(1);
        let config = SnfsConfig::default();
        let candidates = engine::select_polynomials(&n, &config);
        assert_eq!(candidates.len(), 1);

        let only = &candidates[0];
        assert_eq!(only.poly.degree(), 4);
        // sigma = c2 = -1: algebraic coefficients are [1, -4*-1, -4, -1, 1].
        assert_eq!(
            only.poly.alg,
            vec![BigInt::from(1), BigInt::from(4), BigInt::from(-4), BigInt::from(-1), BigInt::from(1)]
        );
    }

    #[test]
    fn homogeneous_cunningham_sum_is_recognized_and_synthesized() {
        // N = 2^97 + 3^97, a homogeneous Cunningham number.
        let n = BigInt::from(2).pow(97) + BigInt::from(3).pow(97);
        let config = SnfsConfig::default();
        let candidates = engine::select_polynomials(&n, &config);
        assert!(!candidates.is_empty());
        assert!(candidates.iter().all(|c| c.valid));
    }

    #[test]
    fn composite_base_with_no_matching_reduction_emits_rebalanced_candidates() {
        // N = 6^97 - 1: base 6 = {2, 3}, e = 97 matches no cyclotomic
        // priority residue, so every target degree gets round-up,
        // round-down, and one rebalanced candidate per prime factor.
        let n = BigInt::from(6).pow(97) - BigInt::from(1);
        let config = SnfsConfig::default();
        let candidates = engine::select_polynomials(&n, &config);

        let degree_six: Vec<_> = candidates.iter().filter(|c| c.poly.degree() == 6).collect();
        assert_eq!(degree_six.len(), 4, "round-up + round-down + 2 rebalanced candidates");
    }

    #[test]
    fn round_number_base_picks_the_r6_reduction_over_the_composite_family() {
        // N = 10^120 + 1: base 10 = {2, 5}, e = 120, 120 % 6 == 0, so the
        // r=6 reduction fires and is the only candidate; the composite
        // no-reduction family never runs.
        let n = BigInt::from(10).pow(120) + BigInt::from(1);
        let config = SnfsConfig::default();
        let candidates = engine::select_polynomials(&n, &config);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].poly.m, BigInt::from(10).pow(20));
        assert_eq!(
            candidates[0].poly.alg,
            vec![BigInt::from(1), BigInt::from(0), BigInt::from(-1), BigInt::from(0), BigInt::from(1)]
        );
    }

    #[test]
    fn ranking_is_total_and_stable_for_equal_scaled_difficulties() {
        let n = std::rc::Rc::new(BigInt::from(15));
        let poly = PolyPair::new(
            vec![BigInt::from(1)],
            [BigInt::from(0), BigInt::from(1)],
            BigInt::from(1),
            1.0,
            Side::Rational,
        );
        let mut a = Candidate::new(n.clone(), FormDescriptor::None, poly.clone(), 200.0);
        a.anorm = 10.0;
        a.rnorm = 10.0;
        let mut b = Candidate::new(n, FormDescriptor::None, poly, 198.0);
        b.anorm = 1e8;
        b.rnorm = 1.0;

        let mut candidates = vec![a, b];
        ranker::rank(&mut candidates);

        assert!((candidates[0].sdifficulty - 200.0).abs() < 1e-9);
        assert!((candidates[1].sdifficulty - 200.0).abs() < 1e-9);
        assert!(candidates[0].sdifficulty <= candidates[1].sdifficulty);
    }

    #[test]
    fn recognizer_is_deterministic_for_the_same_n() {
        let n = (BigInt::from(1) << 256u32) - BigInt::from(1);
        let config = SnfsConfig::default();
        let first = recognizer::recognize(&n, &config);
        let second = recognizer::recognize(&n, &config);
        assert_eq!(first, second);
    }
}
