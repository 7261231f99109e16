//! Keypair and metadata types for validator key provisioning

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use zeroize::ZeroizeOnDrop;

use crate::error::KeygenError;

/// Ed25519 public key size in bytes
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Ed25519 expanded private key size in bytes (seed + public half)
pub const PRIVATE_KEY_SIZE: usize = 64;

/// An Ed25519 signing keypair with generation metadata.
///
/// The private half is wiped from memory when the value is dropped.
/// This type is deliberately not serializable; the only serializable
/// view of a key is [`KeyMetadata`], which is constructed from the
/// public fields alone.
#[derive(ZeroizeOnDrop)]
pub struct KeyPair {
    public_key: [u8; PUBLIC_KEY_SIZE],
    private_key: [u8; PRIVATE_KEY_SIZE],
    #[zeroize(skip)]
    created_at: DateTime<Utc>,
    scheme_version: String,
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &hex::encode(self.public_key))
            .field("private_key", &"<redacted>")
            .field("created_at", &self.created_at)
            .field("scheme_version", &self.scheme_version)
            .finish()
    }
}

impl KeyPair {
    /// Build a keypair from raw key bytes, validating both lengths.
    ///
    /// A length mismatch is a fatal construction error. Keys are never
    /// truncated or padded to fit.
    pub fn from_bytes(
        public_key: &[u8],
        private_key: &[u8],
        scheme_version: &str,
    ) -> Result<Self, KeygenError> {
        let public_key: [u8; PUBLIC_KEY_SIZE] =
            public_key
                .try_into()
                .map_err(|_| KeygenError::InvalidKeySize {
                    kind: "public",
                    got: public_key.len(),
                    expected: PUBLIC_KEY_SIZE,
                })?;
        let private_key: [u8; PRIVATE_KEY_SIZE] =
            private_key
                .try_into()
                .map_err(|_| KeygenError::InvalidKeySize {
                    kind: "private",
                    got: private_key.len(),
                    expected: PRIVATE_KEY_SIZE,
                })?;

        Ok(Self {
            public_key,
            private_key,
            created_at: Utc::now(),
            scheme_version: scheme_version.to_string(),
        })
    }

    pub fn public_key(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.public_key
    }

    /// Raw private key bytes. Callers are responsible for not letting
    /// these escape into logs or structured metadata.
    pub fn private_key(&self) -> &[u8; PRIVATE_KEY_SIZE] {
        &self.private_key
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn scheme_version(&self) -> &str {
        &self.scheme_version
    }

    /// Lowercase hex encoding of the public key
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key)
    }

    /// Lowercase hex encoding of the private key
    pub fn private_key_hex(&self) -> String {
        hex::encode(self.private_key)
    }

    /// Creation time as an RFC 3339 string
    pub fn created_rfc3339(&self) -> String {
        self.created_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Disclosure-safe description of a generated key.
///
/// Holds only public material. The constructor takes individual public
/// fields rather than a [`KeyPair`], so adding a field to `KeyPair` can
/// never leak private bytes through this path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyMetadata {
    pub public_key_hex: String,
    pub created: DateTime<Utc>,
    pub version: String,
    pub comment: String,
}

impl KeyMetadata {
    pub fn new(public_key_hex: String, created: DateTime<Utc>, version: String) -> Self {
        let comment = format!(
            "validator keypair - generated {}",
            created.to_rfc3339_opts(SecondsFormat::Secs, true)
        );
        Self {
            public_key_hex,
            created,
            version,
            comment,
        }
    }

    /// Derive metadata from a keypair's public fields.
    pub fn for_keypair(keypair: &KeyPair) -> Self {
        Self::new(
            keypair.public_key_hex(),
            keypair.created_at(),
            keypair.scheme_version().to_string(),
        )
    }
}
