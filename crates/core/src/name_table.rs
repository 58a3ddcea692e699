//! Placeholder-name reference table.
//!
//! The table maps one-symbol base-32 codes to name-component records. It is
//! loaded once at process start from a comma-delimited file with a header
//! row, is immutable afterwards, and is safe for unsynchronized concurrent
//! reads. Loading is fail-fast: a missing column, a malformed row, or a
//! duplicate code aborts the load rather than producing a partial table.

use crate::constants::{CODE_COLUMN, COMPONENT_COLUMNS};
use crate::{GidError, GidResult};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// One row of the reference dataset: the five name components for a code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameRecord {
    pub last: String,
    pub first: String,
    pub middle: String,
    pub prefix: String,
    pub suffix: String,
}

/// Immutable mapping from base-32 code to [`NameRecord`].
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    records: HashMap<char, NameRecord>,
}

impl NameTable {
    /// Load the table from a delimited file.
    pub fn load(path: &Path) -> GidResult<Self> {
        let contents = fs::read_to_string(path).map_err(GidError::TableRead)?;
        let table = Self::parse(&contents)?;
        tracing::debug!(entries = table.len(), path = %path.display(), "loaded name table");
        Ok(table)
    }

    /// Parse the table from its text form.
    ///
    /// The header row must contain the `Base32` code column and the five
    /// component columns; extra columns are tolerated and column order is
    /// not significant.
    pub fn parse(contents: &str) -> GidResult<Self> {
        let mut lines = contents
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (_, header) = lines.next().ok_or_else(|| GidError::TableHeader {
            column: CODE_COLUMN.to_string(),
        })?;
        let columns: Vec<&str> = header.split(',').map(str::trim).collect();

        let column_index = |name: &str| -> GidResult<usize> {
            columns
                .iter()
                .position(|c| *c == name)
                .ok_or_else(|| GidError::TableHeader {
                    column: name.to_string(),
                })
        };

        let code_idx = column_index(CODE_COLUMN)?;
        let mut component_idx = [0usize; COMPONENT_COLUMNS.len()];
        for (slot, name) in component_idx.iter_mut().zip(COMPONENT_COLUMNS) {
            *slot = column_index(name)?;
        }

        let mut records = HashMap::new();
        for (line, row) in lines {
            let cells: Vec<&str> = row.split(',').map(str::trim).collect();
            if cells.len() < columns.len() {
                return Err(GidError::TableRow {
                    line,
                    reason: format!(
                        "expected {} columns, got {}",
                        columns.len(),
                        cells.len()
                    ),
                });
            }

            let code_cell = cells[code_idx];
            let mut code_chars = code_cell.chars();
            let code = match (code_chars.next(), code_chars.next()) {
                (Some(c), None) if matches!(c, 'A'..='Z' | '2'..='7') => c,
                _ => {
                    return Err(GidError::TableRow {
                        line,
                        reason: format!("code '{code_cell}' is not a single base-32 symbol"),
                    })
                }
            };

            let record = NameRecord {
                last: cells[component_idx[0]].to_string(),
                first: cells[component_idx[1]].to_string(),
                middle: cells[component_idx[2]].to_string(),
                prefix: cells[component_idx[3]].to_string(),
                suffix: cells[component_idx[4]].to_string(),
            };

            if records.insert(code, record).is_some() {
                return Err(GidError::DuplicateCode { code });
            }
        }

        Ok(Self { records })
    }

    /// Looks up the record for a code.
    pub fn get(&self, code: char) -> Option<&NameRecord> {
        self.records.get(&code)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<(char, NameRecord)> for NameTable {
    fn from_iter<I: IntoIterator<Item = (char, NameRecord)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
Base32,Last,First,Middle,Prefix,Suffix
A,Capulet,Hamlet,Aaron,Sir,of Verona
B,Montague,Juliet,Balthasar,Lady,of Denmark
";

    #[test]
    fn parses_rows_into_records() {
        let table = NameTable::parse(SAMPLE).unwrap();
        assert_eq!(table.len(), 2);
        let record = table.get('A').unwrap();
        assert_eq!(record.last, "Capulet");
        assert_eq!(record.suffix, "of Verona");
        assert!(table.get('C').is_none());
    }

    #[test]
    fn tolerates_extra_columns_and_reordering() {
        let input = "\
Notes,First,Last,Middle,Suffix,Prefix,Base32
ignored,Hamlet,Capulet,Aaron,of Verona,Sir,A
";
        let table = NameTable::parse(input).unwrap();
        let record = table.get('A').unwrap();
        assert_eq!(record.first, "Hamlet");
        assert_eq!(record.prefix, "Sir");
    }

    #[test]
    fn rejects_duplicate_codes() {
        let input = "\
Base32,Last,First,Middle,Prefix,Suffix
A,Capulet,Hamlet,Aaron,Sir,of Verona
A,Montague,Juliet,Balthasar,Lady,of Denmark
";
        let err = NameTable::parse(input).expect_err("duplicate code must fail");
        assert!(matches!(err, GidError::DuplicateCode { code: 'A' }));
    }

    #[test]
    fn rejects_missing_columns() {
        let err = NameTable::parse("Base32,Last,First\nA,Capulet,Hamlet\n")
            .expect_err("missing columns must fail");
        match err {
            GidError::TableHeader { column } => assert_eq!(column, "Middle"),
            other => panic!("expected TableHeader, got {other:?}"),
        }
    }

    #[test]
    fn rejects_short_rows_and_wide_codes() {
        let short_row = "\
Base32,Last,First,Middle,Prefix,Suffix
A,Capulet,Hamlet
";
        assert!(matches!(
            NameTable::parse(short_row),
            Err(GidError::TableRow { line: 2, .. })
        ));

        let wide_code = "\
Base32,Last,First,Middle,Prefix,Suffix
AB,Capulet,Hamlet,Aaron,Sir,of Verona
";
        assert!(matches!(
            NameTable::parse(wide_code),
            Err(GidError::TableRow { line: 2, .. })
        ));
    }

    #[test]
    fn load_reads_from_disk_and_reports_missing_files() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let table = NameTable::load(file.path()).unwrap();
        assert_eq!(table.len(), 2);

        let err = NameTable::load(Path::new("/does/not/exist.csv"))
            .expect_err("missing file must fail");
        assert!(matches!(err, GidError::TableRead(_)));
    }
}
