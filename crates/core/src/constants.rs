//! Constants used throughout the SGID core crate.
//!
//! This module contains digest, encoding, and dataset constants to ensure
//! consistency across the codebase and make maintenance easier.

/// Number of bits in a SHA-256 digest.
pub const DIGEST_BITS: u32 = 256;

/// Default digest truncation length in bits. 64 bits keeps GIDs short enough
/// to read aloud while leaving 2^64 identifier values.
pub const DEFAULT_BITSPACE_BITS: u32 = 64;

/// Number of GID symbols consumed when assembling a pseudonym.
pub const PNAME_CHUNKS: usize = 5;

/// Separator between pseudonym components.
pub const PNAME_SEPARATOR: &str = "^";

/// Filename of the reference name table.
pub const NAMES_FILE_NAME: &str = "shakespeare_names.csv";

/// Directory name (relative to the repository root) holding the reference name table.
pub const NAMES_TABLE_DIR: &str = "names-table";

/// Header column holding each row's one-symbol base-32 code.
pub const CODE_COLUMN: &str = "Base32";

/// Header columns holding the name components, in pseudonym order.
pub const COMPONENT_COLUMNS: [&str; PNAME_CHUNKS] = ["Last", "First", "Middle", "Prefix", "Suffix"];

/// Field name holding the date of birth, formatted `MMDDYYYY`.
pub const DOB_FIELD: &str = "dob";
