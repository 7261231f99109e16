//! Keyforge Core Library
//!
//! Signing-identity provisioning for validators of a distributed
//! network: Ed25519 keypair generation, secure on-disk persistence
//! with role-differentiated file permissions, and operator-facing
//! reporting.

pub mod config;
pub mod error;
pub mod generator;
pub mod keypair;
pub mod report;
pub mod store;

// Re-export important types for easier access
pub use config::{RandomnessSource, RunConfig, MAX_COUNT, SCHEME_VERSION};
pub use error::KeygenError;
pub use keypair::{KeyMetadata, KeyPair, PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE};
pub use report::{render, ReportFormat};
pub use store::KeyStore;

use std::fs;

use tracing::info;

/// Run one provisioning batch and return the rendered report.
///
/// Strictly sequential: validate the configuration, ensure the output
/// directory exists (when persisting), generate `count` keypairs, save
/// each one, then render the batch. The first generation or
/// persistence failure aborts the run; artifacts written for earlier
/// indices stay on disk.
pub fn run(config: &RunConfig) -> Result<String, KeygenError> {
    config.validate()?;

    if !config.no_files {
        fs::create_dir_all(&config.output_dir).map_err(|source| KeygenError::OutputDir {
            path: config.output_dir.clone(),
            source,
        })?;
    }

    let mut keypairs = Vec::with_capacity(config.count);
    for i in 0..config.count {
        let keypair = generator::generate(source_for_index(config.randomness, i), &config.scheme_version)?;
        if config.verbose {
            info!("Generated keypair {}/{}", i + 1, config.count);
        }
        keypairs.push(keypair);
    }

    if !config.no_files {
        let store = KeyStore::new(&config.output_dir);
        for (i, keypair) in keypairs.iter().enumerate() {
            let base_name = format!("{}{}", config.prefix, i + 1);
            store.persist(keypair, &base_name)?;
            if config.verbose {
                info!(
                    "Saved keypair to {}",
                    config.output_dir.join(&base_name).display()
                );
            }
        }
    }

    let format = if config.json_output {
        ReportFormat::Json
    } else {
        ReportFormat::Human
    };
    Ok(report::render(&keypairs, format, config.verbose))
}

/// A deterministic source gets a distinct seed per batch index, so a
/// multi-key test run still yields distinct keys.
fn source_for_index(source: RandomnessSource, index: usize) -> RandomnessSource {
    match source {
        RandomnessSource::OsEntropy => RandomnessSource::OsEntropy,
        RandomnessSource::InsecureDeterministic { seed } => {
            RandomnessSource::InsecureDeterministic {
                seed: seed.wrapping_add(index as u64),
            }
        }
    }
}
