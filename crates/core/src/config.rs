//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. The intent is to avoid reading process-wide environment variables
//! during request handling, which can lead to inconsistent behaviour in multi-threaded runtimes
//! and test harnesses.

use crate::constants::{DIGEST_BITS, NAMES_FILE_NAME, NAMES_TABLE_DIR};
use crate::encoder::validate_bitspace;
use crate::{GidError, GidResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
///
/// Holds the deployment-wide salt, the digest truncation length, and the
/// location of the reference name table. Immutable once constructed; the salt
/// is a deployment tweak, never a per-call secret, so GIDs minted by
/// different deployments are not cross-comparable.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    salt: String,
    bitspace_bits: u32,
    names_file: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// The bitspace is validated here so that a misconfigured deployment
    /// fails at startup rather than on the first minting request. An empty
    /// salt is permitted (unsalted deployments mint identical GIDs for
    /// identical inputs).
    pub fn new(
        salt: impl Into<String>,
        bitspace_bits: u32,
        names_file: PathBuf,
    ) -> GidResult<Self> {
        validate_bitspace(bitspace_bits, DIGEST_BITS)?;

        Ok(Self {
            salt: salt.into(),
            bitspace_bits,
            names_file,
        })
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    pub fn bitspace_bits(&self) -> u32 {
        self.bitspace_bits
    }

    pub fn names_file(&self) -> &Path {
        &self.names_file
    }
}

/// Resolve the reference name table file without reading environment variables.
///
/// If `override_path` is provided, it must be an existing file.
/// Otherwise this searches for `names-table/shakespeare_names.csv` relative to the current
/// working directory and then walks up from `CARGO_MANIFEST_DIR`.
pub fn resolve_names_file(override_path: Option<PathBuf>) -> GidResult<PathBuf> {
    if let Some(names_file) = override_path {
        if names_file.is_file() {
            return Ok(names_file);
        }
        return Err(GidError::TableRead(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("names file override does not exist: {}", names_file.display()),
        )));
    }

    let cwd_relative = PathBuf::from(NAMES_TABLE_DIR).join(NAMES_FILE_NAME);
    if cwd_relative.is_file() {
        return Ok(cwd_relative);
    }

    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    for ancestor in manifest_dir.ancestors() {
        let candidate = ancestor.join(NAMES_TABLE_DIR).join(NAMES_FILE_NAME);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    Err(GidError::TableRead(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        format!("could not locate {NAMES_TABLE_DIR}/{NAMES_FILE_NAME}"),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_BITSPACE_BITS;

    #[test]
    fn accepts_default_bitspace() {
        let cfg = CoreConfig::new("", DEFAULT_BITSPACE_BITS, PathBuf::from("names.csv")).unwrap();
        assert_eq!(cfg.bitspace_bits(), 64);
        assert_eq!(cfg.salt(), "");
    }

    #[test]
    fn rejects_bitspace_wider_than_digest() {
        let err = CoreConfig::new("s", 512, PathBuf::from("names.csv"))
            .expect_err("should reject bitspace wider than SHA-256");
        assert!(matches!(
            err,
            GidError::InvalidBitspace {
                bits: 512,
                digest_bits: 256
            }
        ));
    }

    #[test]
    fn rejects_zero_and_unaligned_bitspace() {
        assert!(CoreConfig::new("s", 0, PathBuf::from("names.csv")).is_err());
        assert!(CoreConfig::new("s", 60, PathBuf::from("names.csv")).is_err());
    }

    #[test]
    fn resolves_repository_names_file() {
        // The repository ships the reference table; the ancestor walk from
        // this crate's manifest directory must find it.
        let path = resolve_names_file(None).unwrap();
        assert!(path.is_file());
        assert!(path.ends_with("names-table/shakespeare_names.csv"));
    }

    #[test]
    fn rejects_missing_override() {
        let err = resolve_names_file(Some(PathBuf::from("/does/not/exist.csv")))
            .expect_err("missing override must fail");
        assert!(matches!(err, GidError::TableRead(_)));
    }
}
