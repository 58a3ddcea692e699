//! GID service facade.
//!
//! Binds the immutable [`CoreConfig`] and the loaded [`NameTable`] to the
//! pure minting and resolution functions. The service is cheap to clone and
//! safe to share across threads: nothing behind it is ever mutated after
//! construction, so any number of concurrent callers may mint and resolve
//! without coordination.

use crate::config::CoreConfig;
use crate::fields::FieldSet;
use crate::name_table::NameTable;
use crate::{hasher, resolver, GidResult};
use sgid_types::Gid;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Pure GID operations - no front-end concerns.
#[derive(Clone)]
pub struct GidService {
    cfg: Arc<CoreConfig>,
    names: Arc<NameTable>,
}

impl GidService {
    /// Creates a new `GidService`, loading the name table from the
    /// configured path.
    ///
    /// # Errors
    ///
    /// Returns a `GidError` load variant if the reference dataset is
    /// missing, malformed, or contains duplicate codes.
    pub fn new(cfg: Arc<CoreConfig>) -> GidResult<Self> {
        let names = NameTable::load(cfg.names_file())?;
        Ok(Self {
            cfg,
            names: Arc::new(names),
        })
    }

    /// Creates a `GidService` with an already-built table.
    ///
    /// Intended for tests and embedders that construct tables in memory
    /// rather than loading the shipped dataset.
    pub fn with_table(cfg: Arc<CoreConfig>, names: NameTable) -> Self {
        Self {
            cfg,
            names: Arc::new(names),
        }
    }

    /// Mint a GID for the given fields under this deployment's salt and
    /// bitspace. See [`hasher::compute_gid`].
    pub fn mint_gid(
        &self,
        fields: &FieldSet,
        required: Option<&BTreeSet<String>>,
    ) -> GidResult<Gid> {
        hasher::compute_gid(self.cfg.salt(), self.cfg.bitspace_bits(), fields, required)
    }

    /// Resolve the placeholder pseudonym for a GID. See [`resolver::resolve`].
    pub fn pseudonym(&self, gid: &Gid) -> GidResult<String> {
        resolver::resolve(gid, &self.names)
    }

    /// Extract the year of birth from the `dob` field.
    pub fn birth_year(&self, fields: &FieldSet) -> GidResult<String> {
        fields.birth_year()
    }

    /// The loaded reference table.
    pub fn name_table(&self) -> &NameTable {
        &self.names
    }
}
