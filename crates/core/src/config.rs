//! Run configuration for a single provisioning invocation

use std::path::PathBuf;

use crate::error::KeygenError;

/// Scheme tag stamped onto every generated keypair, identifying the
/// generator that produced it. Overridable through [`RunConfig`] so
/// tests can pin a fixed value.
pub const SCHEME_VERSION: &str = "ed25519.v1";

/// Upper bound on keys per run, a guard against accidental mass
/// generation.
pub const MAX_COUNT: usize = 100;

/// Where generation entropy comes from.
///
/// The insecure variant exists so tests can get reproducible keys. It
/// must never be used for real validator identities; the CLI only
/// reaches it through an explicitly labeled flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomnessSource {
    /// Operating-system CSPRNG. The only production path.
    OsEntropy,
    /// Deterministic PRNG seeded from the given value. Test-only;
    /// UNSAFE for real key material.
    InsecureDeterministic { seed: u64 },
}

/// Immutable configuration for one keygen run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory receiving the per-key artifacts
    pub output_dir: PathBuf,
    /// Number of keypairs to generate (1..=100)
    pub count: usize,
    /// Filename prefix; artifacts are named `<prefix><n>.{priv,pub,yaml}`
    pub prefix: String,
    /// Skip all file writes and only print to stdout
    pub no_files: bool,
    /// Emit the report as a JSON document instead of human-readable text
    pub json_output: bool,
    /// Per-key progress logging and extra report fields
    pub verbose: bool,
    /// Entropy source for key generation
    pub randomness: RandomnessSource,
    /// Version tag recorded on each generated keypair
    pub scheme_version: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./keys"),
            count: 1,
            prefix: "validator".to_string(),
            no_files: false,
            json_output: false,
            verbose: true,
            randomness: RandomnessSource::OsEntropy,
            scheme_version: SCHEME_VERSION.to_string(),
        }
    }
}

impl RunConfig {
    /// Validate the configuration before any generation or I/O happens.
    pub fn validate(&self) -> Result<(), KeygenError> {
        if self.count < 1 {
            return Err(KeygenError::CountTooSmall);
        }
        if self.count > MAX_COUNT {
            return Err(KeygenError::CountTooLarge { max: MAX_COUNT });
        }
        Ok(())
    }
}
