// src/error.rs
use std::io;

use crate::tables::TableKind;

/// Failure of a table request. A failed request writes nothing.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("unknown table `{0}`")]
    UnknownTable(String),
    #[error("invalid domain size `{0}`: expected an integer in 1..=65536")]
    InvalidDomainSize(String),
    #[error("invalid row width `{0}`: expected a positive integer")]
    InvalidRowWidth(String),
    #[error("{name} entry {index} disagrees with its classifier")]
    TableMismatch { name: TableKind, index: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to (de)serialize table JSON: {0}")]
    Json(#[from] serde_json::Error),
}
