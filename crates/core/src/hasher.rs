//! One-way GID derivation from identifying fields.
//!
//! Responsibilities:
//! - Enforce request completeness against an optional required-field set
//! - Fix a canonical field ordering so logically identical requests hash
//!   identically regardless of how the caller assembled them
//! - Normalize values (lowercase) and fold in the deployment salt
//! - Digest with SHA-256 and hand off to the encoder
//!
//! Notes:
//! - This is a pure function of (fields, required, salt, bitspace); no
//!   retries, no I/O, no shared state.
//! - MD5 is deliberately not offered. The legacy generator this replaces
//!   carried a dormant MD5 path; SHA-256 is the floor here.

use crate::encoder;
use crate::fields::FieldSet;
use crate::{GidError, GidResult};
use sgid_types::Gid;
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;

/// Mint a GID from a set of identifying fields.
///
/// When `required` is given, every required key must be present in `fields`
/// and only the required fields participate in the hash, taken in sorted key
/// order. When it is omitted, all supplied fields participate in canonical
/// (sorted key) order. An empty field set is rejected: a GID must derive from
/// at least one identifying attribute, never from the salt alone.
pub fn compute_gid(
    salt: &str,
    bitspace_bits: u32,
    fields: &FieldSet,
    required: Option<&BTreeSet<String>>,
) -> GidResult<Gid> {
    let values: Vec<&str> = match required {
        Some(reqs) => {
            let mut missing = Vec::new();
            let mut values = Vec::with_capacity(reqs.len());
            for key in reqs {
                match fields.get(key) {
                    Some(value) => values.push(value),
                    None => missing.push(key.clone()),
                }
            }
            if !missing.is_empty() {
                tracing::warn!(?missing, "request failed completeness check");
                return Err(GidError::IncompleteRequest { missing });
            }
            values
        }
        None => fields.values_in_canonical_order().collect(),
    };

    if values.is_empty() {
        tracing::warn!("request supplied no identifying fields");
        return Err(GidError::IncompleteRequest { missing: Vec::new() });
    }

    let mut hasher = Sha256::new();
    for value in &values {
        hasher.update(value.to_lowercase().as_bytes());
    }
    hasher.update(salt.as_bytes());
    let digest = hasher.finalize();

    encoder::encode(&digest, bitspace_bits)
}
