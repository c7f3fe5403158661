// src/tables/io.rs
use std::{
    io::{BufWriter, Write},
    path::Path,
    time::Instant,
};

use serde::Deserialize;

use super::{LookupTable, TableKind, build_table};
use crate::TableError;

// -------------------- JSON (de)serialization --------------------

/// On-disk shape; checked against the classifier before it becomes a table.
#[derive(Deserialize)]
pub(crate) struct TableDisk {
    name: TableKind,
    flags: Vec<bool>,
}

impl TryFrom<TableDisk> for LookupTable {
    type Error = TableError;

    fn try_from(d: TableDisk) -> Result<Self, TableError> {
        if d.flags.is_empty() {
            return Err(TableError::InvalidDomainSize("0".into()));
        }
        let expected = build_table(d.name, d.flags.len())?;
        if let Some(index) = d.flags.iter().zip(expected.flags()).position(|(a, b)| a != b) {
            return Err(TableError::TableMismatch {
                name: d.name,
                index,
            });
        }
        Ok(expected)
    }
}

pub fn save_table_json(path: &Path, t: &LookupTable) -> Result<(), TableError> {
    let f = std::fs::File::create(path)?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer(&mut w, t)?;
    w.flush()?;
    Ok(())
}

/// Writes several tables as one JSON array, in the given order.
pub fn save_tables_json(path: &Path, tables: &[LookupTable]) -> Result<(), TableError> {
    let instant = Instant::now();
    let f = std::fs::File::create(path)?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, tables)?;
    w.flush()?;
    log::debug!(
        "Saved {} table(s) to {} in {} ms",
        tables.len(),
        path.display(),
        instant.elapsed().as_millis()
    );
    Ok(())
}

/// Loads one table, rejecting empty tables and flags that contradict the
/// named classifier.
pub fn load_table_json_bytes(data: &[u8]) -> Result<LookupTable, TableError> {
    let disk = serde_json::from_slice::<TableDisk>(data)?;
    LookupTable::try_from(disk)
}
