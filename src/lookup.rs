// src/lookup.rs
//! Byte-class tables baked in at compile time, for use inside parser loops.
//!
//! These are built from the same predicates as [`crate::tables`] so an
//! emitted artifact and the tables here never disagree.

use crate::tables::classes;

/// Builds a `[bool; N]` literal from `0`/`1` entries.
///
/// This is the wrapper the emitted tables are written against:
///
/// ```
/// use sipmap::byte_map;
///
/// static DIGITS: [bool; 4] = byte_map![
///     0, 1, 1, 0,
/// ];
/// assert_eq!(DIGITS, [false, true, true, false]);
/// ```
#[macro_export]
macro_rules! byte_map {
    ($($flag:expr),* $(,)?) => {
        [$($flag != 0),*]
    };
}

macro_rules! baked_table {
    ($classify:path) => {{
        let mut table = [false; 256];
        let mut i = 0;
        while i < 256 {
            table[i] = $classify(i as u8);
            i += 1;
        }
        table
    }};
}

pub static TOKEN_MAP: [bool; 256] = baked_table!(classes::is_token);
pub static REQUEST_URI_MAP: [bool; 256] = baked_table!(classes::is_request_uri);
pub static REASON_PHRASE_MAP: [bool; 256] = baked_table!(classes::is_reason_phrase);
pub static HEADER_VALUE_MAP: [bool; 256] = baked_table!(classes::is_header_value);

#[inline]
pub fn is_token(b: u8) -> bool {
    TOKEN_MAP[b as usize]
}

#[inline]
pub fn is_request_uri(b: u8) -> bool {
    REQUEST_URI_MAP[b as usize]
}

#[inline]
pub fn is_reason_phrase(b: u8) -> bool {
    REASON_PHRASE_MAP[b as usize]
}

#[inline]
pub fn is_header_value(b: u8) -> bool {
    HEADER_VALUE_MAP[b as usize]
}
