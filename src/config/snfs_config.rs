// src/config/snfs_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Runtime configuration for polynomial selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnfsConfig {
    /// Directory polynomial files are written into.
    pub output_dir: String,

    /// Logging level (error, warn, info, debug, trace).
    pub log_level: String,

    /// Largest base considered by the Brent and homogeneous-Cunningham scans.
    pub max_base: u32,

    /// Upper bound, in bits, on b^e for the recognizer's exponent search.
    pub bit_limit: u32,

    /// Scaled-difficulty threshold above which the test-sieve arbiter engages.
    pub testsieve_threshold: f64,

    /// Number of top-ranked candidates the arbiter submits to test sieving.
    pub testsieve_top_k: usize,
}

impl Default for SnfsConfig {
    fn default() -> Self {
        SnfsConfig {
            output_dir: ".".to_string(),
            log_level: "info".to_string(),
            max_base: 100,
            bit_limit: 1000,
            testsieve_threshold: 1e9,
            testsieve_top_k: 3,
        }
    }
}

impl SnfsConfig {
    /// Load configuration with precedence: defaults → `snfs.toml`/`snfs.yaml` → `SNFS_` env vars.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::with_defaults(Config::builder())?;

        if Path::new("snfs.toml").exists() {
            builder = builder.add_source(File::with_name("snfs.toml"));
        } else if Path::new("snfs.yaml").exists() {
            builder = builder.add_source(File::with_name("snfs.yaml"));
        }

        builder = builder.add_source(
            Environment::with_prefix("SNFS")
                .separator("_")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Load configuration with an explicit config file path, still subject to env overrides.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::with_defaults(Config::builder())?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        builder = builder.add_source(
            Environment::with_prefix("SNFS")
                .separator("_")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    fn with_defaults(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        builder
            .set_default("output_dir", ".")?
            .set_default("log_level", "info")?
            .set_default("max_base", 100)?
            .set_default("bit_limit", 1000)?
            .set_default("testsieve_threshold", 1e9)?
            .set_default("testsieve_top_k", 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_spec_defaults() {
        let config = SnfsConfig::default();
        assert_eq!(config.output_dir, ".");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.max_base, 100);
        assert_eq!(config.bit_limit, 1000);
        assert_eq!(config.testsieve_top_k, 3);
    }

    #[test]
    fn load_without_file_falls_back_to_defaults() {
        let config = SnfsConfig::load().unwrap_or_else(|_| SnfsConfig::default());
        assert_eq!(config.max_base, 100);
    }
}
