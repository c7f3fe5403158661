// src/tables/mod.rs
pub mod build;
pub mod classes;
pub mod emit;
pub mod io;
pub mod kind;

use serde::{Deserialize, Serialize};

pub use build::{build_table, build_tables};
pub use emit::{emit_tables, render_table, write_table};
pub use io::{load_table_json_bytes, save_table_json, save_tables_json};
pub use kind::{ALL_KINDS, Classifier, TableKind, resolve_kinds};

use crate::TableError;

pub const DEFAULT_DOMAIN_SIZE: usize = 256;
pub const DEFAULT_ROW_WIDTH: usize = 16;
/// Largest domain we will classify. Everything past 255 is padding anyway.
pub const MAX_DOMAIN_SIZE: usize = 1 << 16;

/// Classification of `0..len()` under one table kind.
///
/// Only [`build_table`] and JSON loading create these, and loading checks the
/// flags against the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "io::TableDisk")]
pub struct LookupTable {
    name: TableKind,
    flags: Vec<bool>,
}

impl LookupTable {
    pub(crate) fn new(name: TableKind, flags: Vec<bool>) -> Self {
        Self { name, flags }
    }

    pub fn name(&self) -> TableKind {
        self.name
    }

    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// `None` past the end of the domain.
    pub fn get(&self, i: usize) -> Option<bool> {
        self.flags.get(i).copied()
    }

    /// Rows of `width` flags; only the last may be short.
    ///
    /// Panics if `width` is 0.
    pub fn rows(&self, width: usize) -> std::slice::Chunks<'_, bool> {
        self.flags.chunks(width)
    }
}

/// Shape of the emitted tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitOptions {
    pub domain_size: usize,
    pub row_width: usize,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            domain_size: DEFAULT_DOMAIN_SIZE,
            row_width: DEFAULT_ROW_WIDTH,
        }
    }
}

impl EmitOptions {
    pub fn with_domain_size(mut self, domain_size: usize) -> Self {
        self.domain_size = domain_size;
        self
    }

    pub fn with_row_width(mut self, row_width: usize) -> Self {
        self.row_width = row_width;
        self
    }

    /// Splits command-line arguments into options and table names.
    ///
    /// `--size=N` and `--row-width=W` set the shape; anything else is a table
    /// name. No names selects every table in [`ALL_KINDS`] order. The options
    /// are validated before returning.
    pub fn from_args<I>(args: I) -> Result<(Self, Vec<String>), TableError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut opts = Self::default();
        let mut names = Vec::new();
        for arg in args {
            if let Some(v) = arg.strip_prefix("--size=") {
                opts.domain_size = parse_domain_size(v)?;
            } else if let Some(v) = arg.strip_prefix("--row-width=") {
                opts.row_width = v
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| TableError::InvalidRowWidth(v.to_string()))?;
            } else {
                names.push(arg);
            }
        }
        opts.validate()?;
        if names.is_empty() {
            names = ALL_KINDS.iter().map(|k| k.name().to_string()).collect();
        }
        Ok((opts, names))
    }

    pub fn validate(&self) -> Result<(), TableError> {
        if self.domain_size == 0 || self.domain_size > MAX_DOMAIN_SIZE {
            return Err(TableError::InvalidDomainSize(self.domain_size.to_string()));
        }
        if self.row_width == 0 {
            return Err(TableError::InvalidRowWidth(self.row_width.to_string()));
        }
        Ok(())
    }
}

/// Parses a domain size given as text (e.g. from the command line).
///
/// Accepts integers in `1..=MAX_DOMAIN_SIZE`.
pub fn parse_domain_size(text: &str) -> Result<usize, TableError> {
    match text.trim().parse::<usize>() {
        Ok(n) if (1..=MAX_DOMAIN_SIZE).contains(&n) => Ok(n),
        _ => Err(TableError::InvalidDomainSize(text.to_string())),
    }
}
