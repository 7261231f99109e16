//! Ed25519 keypair generation

use ed25519_dalek::SigningKey;
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use zeroize::Zeroizing;

use crate::config::RandomnessSource;
use crate::error::KeygenError;
use crate::keypair::KeyPair;

/// Generate one Ed25519 keypair from the given entropy source.
///
/// Each call is independent and stateless. The 32-byte seed drawn from
/// the source is wiped once the keypair has been expanded. Key lengths
/// are re-checked on construction even though the signature library
/// fixes them; a mismatch would mean a degraded crypto backend and
/// must never produce a silently weak key.
pub fn generate(
    source: RandomnessSource,
    scheme_version: &str,
) -> Result<KeyPair, KeygenError> {
    let mut seed = Zeroizing::new([0u8; 32]);

    match source {
        RandomnessSource::OsEntropy => {
            OsRng
                .try_fill_bytes(seed.as_mut())
                .map_err(|source| KeygenError::EntropyUnavailable { source })?;
        }
        RandomnessSource::InsecureDeterministic { seed: prng_seed } => {
            // NOT cryptographically meaningful. Reproducible keys for
            // tests only.
            StdRng::seed_from_u64(prng_seed).fill_bytes(seed.as_mut());
        }
    }

    let signing_key = SigningKey::from_bytes(&seed);
    let keypair_bytes = Zeroizing::new(signing_key.to_keypair_bytes());
    let public_bytes = signing_key.verifying_key().to_bytes();

    KeyPair::from_bytes(&public_bytes, keypair_bytes.as_ref(), scheme_version)
}
