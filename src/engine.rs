// src/engine.rs
//
// Composes recognition, synthesis, validation, norm estimation, and
// ranking into the engine's single public entry point.

use std::rc::Rc;

use log::{info, warn};
use num::BigInt;

use crate::arbiter::{self, NullOracle, TestSieveOracle};
use crate::config::SnfsConfig;
use crate::core::candidate::Candidate;
use crate::norms;
use crate::ranker;
use crate::recognizer;
use crate::synthesis;
use crate::validator;

/// Runs the full pipeline and returns every valid candidate, ranked
/// ascending by scaled difficulty (best first). Empty if no special form
/// was recognized, or if every synthesized candidate failed validation.
pub fn select_polynomials(n: &BigInt, config: &SnfsConfig) -> Vec<Candidate> {
    let form = recognizer::recognize(n, config);
    if !form.is_found() {
        warn!("no special form recognized for N; general NFS is required");
        return Vec::new();
    }
    info!("recognized form: {}", form.describe());

    let shared_n = Rc::new(n.clone());
    let mut candidates = synthesis::synthesize(&form, &shared_n);
    candidates = candidates.into_iter().map(validator::validate).filter(|c| c.valid).collect();

    for candidate in candidates.iter_mut() {
        norms::estimate_norms(candidate);
    }

    ranker::rank(&mut candidates);
    candidates
}

/// Runs the pipeline and picks a single winner, consulting `oracle` when
/// the top candidates are large and close enough to justify test sieving.
pub fn select_best(
    n: &BigInt,
    config: &SnfsConfig,
    oracle: &dyn TestSieveOracle,
) -> Option<Candidate> {
    let candidates = select_polynomials(n, config);
    if candidates.is_empty() {
        return None;
    }
    let winner_index = arbiter::arbitrate(&candidates, oracle, config.testsieve_threshold, config.testsieve_top_k);
    candidates.into_iter().nth(winner_index)
}

/// Convenience wrapper over [`select_best`] using the default (always
/// unavailable) test-sieve oracle.
pub fn select_best_without_oracle(n: &BigInt, config: &SnfsConfig) -> Option<Candidate> {
    select_best(n, config, &NullOracle)
}
