// src/lib.rs
//! Byte-class lookup tables for the SIP grammar (RFC 3261).
//!
//! [`tables`] holds the per-production classifiers and the emitter that turns
//! them into `byte_map!` declarations; [`lookup`] holds the same tables baked
//! in at compile time for parsers.

pub mod error;
pub mod lookup;
pub mod tables;

pub use error::TableError;
