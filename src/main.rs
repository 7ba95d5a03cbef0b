// src/main.rs

use std::path::Path;
use std::process;

use env_logger::Env;
use log::{error, info, warn};
use num::BigInt;

use snfs_poly::config::SnfsConfig;
use snfs_poly::core::output_location::OutputLocation;
use snfs_poly::engine;
use snfs_poly::output;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("usage: {} <N> [config-file]", args.get(0).map(String::as_str).unwrap_or("snfs-poly"));
        process::exit(2);
    }

    let config = match args.get(2) {
        Some(path) => SnfsConfig::load_from_file(path),
        None => SnfsConfig::load(),
    }
    .unwrap_or_else(|e| {
        eprintln!("failed to load configuration, falling back to defaults: {}", e);
        SnfsConfig::default()
    });

    let env = Env::default()
        .filter_or("SNFS_LOG", config.log_level.clone())
        .write_style_or("SNFS_LOG_STYLE", "always");
    env_logger::Builder::from_env(env).init();

    let n: BigInt = match args[1].parse() {
        Ok(n) => n,
        Err(_) => {
            error!("could not parse N as an integer: {}", args[1]);
            process::exit(2);
        }
    };

    info!("selecting a polynomial for N ({} digits)", n.to_string().len());

    match engine::select_best_without_oracle(&n, &config) {
        Some(winner) => {
            let location = OutputLocation::new(&config.output_dir);
            let path = location.poly_filepath(&n);
            if let Err(e) = output::write_poly_file(Path::new(&path), &n, &winner) {
                error!("failed to write polynomial file {}: {}", path, e);
                process::exit(1);
            }
            info!(
                "wrote {} (form: {}, scaled difficulty: {:.2})",
                path,
                winner.form.describe(),
                winner.sdifficulty
            );
        }
        None => {
            warn!("no special-number form was recognized for N; nothing to write");
            process::exit(1);
        }
    }
}
