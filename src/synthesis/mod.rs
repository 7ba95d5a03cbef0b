// src/synthesis/mod.rs

pub mod general;
pub mod reductions;

use std::rc::Rc;

use num::BigInt;

use crate::core::candidate::Candidate;
use crate::core::form::FormDescriptor;

/// Synthesizes the candidate family for a recognized form: a single
/// cyclotomic-reduction candidate if one priority residue matches,
/// otherwise the full no-reduction family.
pub fn synthesize(form: &FormDescriptor, n: &Rc<BigInt>) -> Vec<Candidate> {
    if !form.is_found() {
        return Vec::new();
    }
    if let Some(candidate) = reductions::try_reduction(form, n) {
        return vec![candidate];
    }
    general::synthesize_no_reduction(form, n)
}
