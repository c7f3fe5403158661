// src/tables/build.rs
use rayon::prelude::*;

use super::{EmitOptions, LookupTable, MAX_DOMAIN_SIZE, TableKind};
use crate::TableError;

/// Classifies `0..domain_size` under `kind`.
///
/// Indices past 255 are not bytes and come out as non-members.
pub fn build_table(kind: TableKind, domain_size: usize) -> Result<LookupTable, TableError> {
    if domain_size == 0 || domain_size > MAX_DOMAIN_SIZE {
        return Err(TableError::InvalidDomainSize(domain_size.to_string()));
    }
    let classify = kind.classifier();
    let flags: Vec<bool> = (0..domain_size)
        .map(|i| u8::try_from(i).is_ok_and(classify))
        .collect();

    log::debug!(
        "[tables] {kind}: {} of {domain_size} entries set",
        flags.iter().filter(|&&f| f).count()
    );
    Ok(LookupTable::new(kind, flags))
}

/// Builds one table per kind in parallel. Output order matches `kinds`.
pub fn build_tables(
    kinds: &[TableKind],
    opts: &EmitOptions,
) -> Result<Vec<LookupTable>, TableError> {
    opts.validate()?;
    kinds
        .par_iter()
        .map(|&k| build_table(k, opts.domain_size))
        .collect()
}
