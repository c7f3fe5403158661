// src/main.rs
// Emit byte-class tables for the SIP parser on stdout.
// Usage:
//   cargo run -- TOKEN_MAP REQUEST_URI_MAP
//   cargo run -- --size=256 --row-width=16 HEADER_VALUE_MAP
//   cargo run                                  # all tables
use std::io;

use anyhow::{Context, Result};
use sipmap::tables::{EmitOptions, emit_tables};

fn main() -> Result<()> {
    let (opts, names) =
        EmitOptions::from_args(std::env::args().skip(1)).context("invalid arguments")?;
    eprintln!(
        "[sipmap] emitting {} table(s): size={} row_width={}",
        names.len(),
        opts.domain_size,
        opts.row_width
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    emit_tables(&mut out, &names, &opts).context("failed to emit tables")?;
    Ok(())
}
