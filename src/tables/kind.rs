// src/tables/kind.rs
use std::{fmt, str::FromStr, sync::LazyLock};

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::classes;
use crate::{TableError, lookup};

/// A byte predicate.
pub type Classifier = fn(u8) -> bool;

/// The tables we know how to generate, one per grammar production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableKind {
    #[serde(rename = "TOKEN_MAP")]
    Token,
    #[serde(rename = "REQUEST_URI_MAP")]
    RequestUri,
    #[serde(rename = "REASON_PHRASE_MAP")]
    ReasonPhrase,
    #[serde(rename = "HEADER_VALUE_MAP")]
    HeaderValue,
}

pub const ALL_KINDS: &[TableKind] = &[
    TableKind::Token,
    TableKind::RequestUri,
    TableKind::ReasonPhrase,
    TableKind::HeaderValue,
];

static REGISTRY: LazyLock<HashMap<&'static str, TableKind>> =
    LazyLock::new(|| ALL_KINDS.iter().map(|&k| (k.name(), k)).collect());

impl TableKind {
    /// Name of the emitted static.
    pub const fn name(self) -> &'static str {
        match self {
            TableKind::Token => "TOKEN_MAP",
            TableKind::RequestUri => "REQUEST_URI_MAP",
            TableKind::ReasonPhrase => "REASON_PHRASE_MAP",
            TableKind::HeaderValue => "HEADER_VALUE_MAP",
        }
    }

    pub fn classifier(self) -> Classifier {
        match self {
            TableKind::Token => classes::is_token,
            TableKind::RequestUri => classes::is_request_uri,
            TableKind::ReasonPhrase => classes::is_reason_phrase,
            TableKind::HeaderValue => classes::is_header_value,
        }
    }

    /// The compile-time copy of this table.
    pub fn baked(self) -> &'static [bool; 256] {
        match self {
            TableKind::Token => &lookup::TOKEN_MAP,
            TableKind::RequestUri => &lookup::REQUEST_URI_MAP,
            TableKind::ReasonPhrase => &lookup::REASON_PHRASE_MAP,
            TableKind::HeaderValue => &lookup::HEADER_VALUE_MAP,
        }
    }

    pub fn from_name(name: &str) -> Result<Self, TableError> {
        REGISTRY
            .get(name)
            .copied()
            .ok_or_else(|| TableError::UnknownTable(name.to_string()))
    }
}

impl FromStr for TableKind {
    type Err = TableError;
    fn from_str(s: &str) -> Result<Self, TableError> {
        Self::from_name(s)
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves every name up front; one unknown name fails the whole request.
pub fn resolve_kinds<S: AsRef<str>>(names: &[S]) -> Result<Vec<TableKind>, TableError> {
    names.iter().map(|n| TableKind::from_name(n.as_ref())).collect()
}
