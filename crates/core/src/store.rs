//! Secure on-disk persistence of generated keypairs
//!
//! Every keypair becomes three artifacts with distinct permission
//! classes: the hex private key (owner-only), the hex public key
//! (world-readable), and a YAML metadata file (owner + group). The
//! private artifact is created with its restrictive mode from the
//! first byte, never chmod-ed down after the fact.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::KeygenError;
use crate::keypair::{KeyMetadata, KeyPair};

/// Owner read/write only; never group- or world-readable
pub const PRIVATE_KEY_FILE_MODE: u32 = 0o600;
/// Owner read/write, others read
pub const PUBLIC_KEY_FILE_MODE: u32 = 0o644;
/// Owner read/write, group read
pub const METADATA_FILE_MODE: u32 = 0o640;

/// Writes keypair artifacts into a target directory.
pub struct KeyStore {
    directory: PathBuf,
}

impl KeyStore {
    pub fn new(directory: &Path) -> Self {
        Self {
            directory: directory.to_path_buf(),
        }
    }

    /// Persist one keypair as `<base_name>.priv`, `<base_name>.pub` and
    /// `<base_name>.yaml`, in that order.
    ///
    /// Each artifact is written independently; on failure the artifacts
    /// already written stay on disk.
    pub fn persist(&self, keypair: &KeyPair, base_name: &str) -> Result<(), KeygenError> {
        let priv_path = self.directory.join(format!("{base_name}.priv"));
        write_restricted(&priv_path, keypair.private_key_hex().as_bytes())?;
        debug!("wrote private key artifact {}", priv_path.display());

        let pub_path = self.directory.join(format!("{base_name}.pub"));
        write_with_mode(&pub_path, keypair.public_key_hex().as_bytes(), PUBLIC_KEY_FILE_MODE)?;
        debug!("wrote public key artifact {}", pub_path.display());

        // Metadata is built from the disclosure-safe view, never from
        // the keypair itself.
        let metadata = KeyMetadata::for_keypair(keypair);
        let yaml = serde_yaml::to_string(&metadata)?;
        let meta_path = self.directory.join(format!("{base_name}.yaml"));
        write_with_mode(&meta_path, yaml.as_bytes(), METADATA_FILE_MODE)?;
        debug!("wrote metadata artifact {}", meta_path.display());

        Ok(())
    }
}

/// Create the file with owner-only permissions before any content is
/// written, so the private key is never readable by anyone else even
/// for an instant.
fn write_restricted(path: &Path, content: &[u8]) -> Result<(), KeygenError> {
    let map_err = |source| KeygenError::WriteArtifact {
        artifact: path.to_path_buf(),
        source,
    };

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(PRIVATE_KEY_FILE_MODE);
    }

    let mut file = options.open(path).map_err(map_err)?;
    file.write_all(content).map_err(map_err)?;

    // The open(2) mode is subject to the umask; force the exact bits.
    set_mode(path, PRIVATE_KEY_FILE_MODE).map_err(map_err)?;
    Ok(())
}

fn write_with_mode(path: &Path, content: &[u8], mode: u32) -> Result<(), KeygenError> {
    let map_err = |source| KeygenError::WriteArtifact {
        artifact: path.to_path_buf(),
        source,
    };

    fs::write(path, content).map_err(map_err)?;
    set_mode(path, mode).map_err(map_err)?;
    Ok(())
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> std::io::Result<()> {
    // No POSIX permission bits on this platform; files inherit the
    // platform defaults.
    Ok(())
}
