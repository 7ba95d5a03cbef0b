// src/core/output_location.rs

use num::BigInt;

const SHOW_DIGITS: usize = 22;
const ELLIPSIS: &str = "[...]";

/// Resolves where a winning candidate's polynomial file is written.
#[derive(Debug, Clone)]
pub struct OutputLocation {
    pub base_directory: String,
}

impl OutputLocation {
    pub fn new(base_directory: &str) -> Self {
        OutputLocation {
            base_directory: base_directory.to_string(),
        }
    }

    pub fn poly_filepath(&self, n: &BigInt) -> String {
        format!("{}/{}.poly", self.base_directory, Self::get_unique_name_from_n(n))
    }

    /// Truncates N's decimal representation to a filesystem-friendly name,
    /// keeping the leading and trailing digits (the part most likely to
    /// distinguish one N from another at a glance).
    pub fn get_unique_name_from_n(n: &BigInt) -> String {
        let result = n.to_string();
        if result.len() >= (SHOW_DIGITS * 2) + ELLIPSIS.len() {
            format!(
                "{}{}{}",
                &result[..SHOW_DIGITS],
                ELLIPSIS,
                &result[result.len() - SHOW_DIGITS..]
            )
        } else {
            result
        }
    }
}

impl Default for OutputLocation {
    fn default() -> Self {
        OutputLocation {
            base_directory: ".".to_string(),
        }
    }
}
