// src/arbiter.rs
//
// Breaks near-ties among the top-ranked candidates by delegating to an
// external test-sieving collaborator. The core never sieves anything
// itself; it only knows how to ask and how to degrade gracefully when no
// answer is available.

use log::warn;

use crate::core::candidate::Candidate;

/// A sieving job description handed to the external oracle. Real sieving
/// parameters (lattice bounds, factor base size, ...) are the oracle's own
/// concern; this core only needs enough to identify which candidate a job
/// came from.
#[derive(Debug, Clone)]
pub struct SieveJob {
    pub candidate_index: usize,
    pub sdifficulty: f64,
}

/// Stands in for the external `get_ggnfs_params` / `test_sieve`
/// collaborators. A concrete sieving driver implements this; the engine
/// itself only depends on the trait.
pub trait TestSieveOracle {
    /// Runs a short trial sieve over `jobs` and returns the index (into
    /// the original candidate slice) of the best performer, or `None` if
    /// sieving could not be run at all.
    fn test_sieve(&self, jobs: &[SieveJob]) -> Option<usize>;
}

/// An oracle that is always unavailable — the engine's default when no
/// sieving driver is wired in, matching the `TestSieveUnavailable`
/// degrade-to-candidate-0 path.
pub struct NullOracle;

impl TestSieveOracle for NullOracle {
    fn test_sieve(&self, _jobs: &[SieveJob]) -> Option<usize> {
        None
    }
}

/// Picks the winning candidate from an already-ranked, non-empty slice.
/// Below `threshold` or with fewer than two candidates, the top-ranked
/// candidate wins outright. Otherwise the top `top_k` are submitted to
/// `oracle`; a `None` or out-of-range response degrades to candidate 0.
pub fn arbitrate(
    candidates: &[Candidate],
    oracle: &dyn TestSieveOracle,
    threshold: f64,
    top_k: usize,
) -> usize {
    if candidates.len() < 2 {
        return 0;
    }
    let contenders = &candidates[..top_k.min(candidates.len())];
    let worth_testing = contenders.iter().any(|c| c.sdifficulty > threshold);
    if !worth_testing {
        return 0;
    }

    let jobs: Vec<SieveJob> = contenders
        .iter()
        .enumerate()
        .map(|(i, c)| SieveJob { candidate_index: i, sdifficulty: c.sdifficulty })
        .collect();

    match oracle.test_sieve(&jobs) {
        Some(id) if id < contenders.len() => id,
        _ => {
            warn!("test-sieve oracle unavailable or returned an invalid index; defaulting to candidate 0");
            0
        }
    }
}
