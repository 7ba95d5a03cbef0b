// src/output.rs
//
// Emits the winning candidate as a line-oriented polynomial file in the
// conventional msieve/GGNFS job-file stanza.

use std::fs;
use std::io;
use std::path::Path;

use num::BigInt;

use crate::core::candidate::Candidate;
use crate::core::poly_pair::Side;

/// Renders `candidate` (already ranked, for N) as the polynomial file text.
pub fn format_poly_file(n: &BigInt, candidate: &Candidate) -> String {
    let side = match candidate.sieve_side() {
        Side::Algebraic => "algebraic",
        Side::Rational => "rational",
    };

    let mut out = String::new();
    out.push_str(&format!("n: {}\n", n));
    out.push_str(&format!(
        "# {}, difficulty: {:.2}, anorm: {:.2e}, rnorm: {:.2e}\n",
        candidate.form.describe(),
        candidate.difficulty,
        candidate.anorm,
        candidate.rnorm,
    ));
    out.push_str(&format!(
        "# scaled difficulty: {:.2}, suggest sieving {} side\n",
        candidate.sdifficulty, side
    ));
    out.push_str("type: snfs\n");
    out.push_str(&format!("size: {}\n", candidate.sdifficulty.trunc() as i64));

    let degree = candidate.poly.degree();
    for i in (0..=degree).rev() {
        out.push_str(&format!("c{}: {}\n", i, candidate.poly.alg[i]));
    }
    out.push_str(&format!("Y1: {}\n", candidate.poly.rat[1]));
    out.push_str(&format!("Y0: {}\n", candidate.poly.rat[0]));
    out.push_str(&format!("skew: {:.4}\n", candidate.poly.skew));

    out
}

/// Writes the rendered polynomial file to `path`, creating parent
/// directories as needed.
pub fn write_poly_file(path: &Path, n: &BigInt, candidate: &Candidate) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format_poly_file(n, candidate))
}
