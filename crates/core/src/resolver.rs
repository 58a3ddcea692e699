//! Pseudonym assembly from GID chunks.
//!
//! The first five symbols of a GID index the name table; the components of
//! the resolved records are joined as `Last^First^Middle^Prefix^Suffix`.
//! The mapping is lossy and non-unique: it is a compact display alias,
//! not a reversal of the one-way hash.

use crate::constants::{PNAME_CHUNKS, PNAME_SEPARATOR};
use crate::name_table::NameTable;
use crate::{GidError, GidResult};
use sgid_types::Gid;

/// Resolve the placeholder pseudonym for a GID.
///
/// Fails with [`GidError::MalformedGid`] when the GID carries fewer than
/// five symbols, and with [`GidError::UnknownCode`] when any chunk is absent
/// from the table. No partially assembled name is ever returned.
pub fn resolve(gid: &Gid, table: &NameTable) -> GidResult<String> {
    let chunks: Vec<char> = gid.as_str().chars().take(PNAME_CHUNKS).collect();
    if chunks.len() < PNAME_CHUNKS {
        return Err(GidError::MalformedGid {
            symbols: gid.symbol_count(),
            expected: PNAME_CHUNKS,
        });
    }

    let mut records = Vec::with_capacity(PNAME_CHUNKS);
    for code in chunks {
        let record = table.get(code).ok_or(GidError::UnknownCode { code })?;
        records.push(record);
    }

    // Chunk position selects the component: 0 -> Last .. 4 -> Suffix.
    let components = [
        records[0].last.as_str(),
        records[1].first.as_str(),
        records[2].middle.as_str(),
        records[3].prefix.as_str(),
        records[4].suffix.as_str(),
    ];
    Ok(components.join(PNAME_SEPARATOR))
}
