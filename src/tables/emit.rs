// src/tables/emit.rs
// Text artifact, one declaration per table:
//
//   static TOKEN_MAP: [bool; 256] = byte_map![
//       0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
//       ...
//   ];
//   <blank line>
use std::io::Write;

use super::{EmitOptions, LookupTable, build_tables, resolve_kinds};
use crate::TableError;

const ROW_INDENT: &str = "   ";

/// Renders one table with `row_width` entries per row.
pub fn render_table(table: &LookupTable, row_width: usize) -> Result<String, TableError> {
    if row_width == 0 {
        return Err(TableError::InvalidRowWidth(row_width.to_string()));
    }
    let n = table.len();
    // header + ~3 bytes per entry + row indents
    let mut out = String::with_capacity(64 + n * 3 + (n / row_width + 1) * 4);

    out.push_str(&format!("static {}: [bool; {n}] = byte_map![", table.name()));
    for (r, row) in table.rows(row_width).enumerate() {
        out.push('\n');
        out.push_str(ROW_INDENT);
        for &flag in row {
            out.push_str(if flag { " 1," } else { " 0," });
        }
        log::trace!("[emit] {} row {r}: {} entries", table.name(), row.len());
    }
    out.push_str("\n];\n\n");
    Ok(out)
}

/// Writes one rendered table to `w`.
pub fn write_table<W: Write>(
    w: &mut W,
    table: &LookupTable,
    row_width: usize,
) -> Result<(), TableError> {
    let text = render_table(table, row_width)?;
    w.write_all(text.as_bytes())?;
    Ok(())
}

/// Resolves, builds and renders every requested table, then writes them to
/// `w` in request order.
///
/// Everything is rendered before the first byte is written, so a bad name or
/// bad options leave `w` untouched.
pub fn emit_tables<W: Write, S: AsRef<str>>(
    w: &mut W,
    names: &[S],
    opts: &EmitOptions,
) -> Result<(), TableError> {
    opts.validate()?;
    let kinds = resolve_kinds(names)?;
    let tables = build_tables(&kinds, opts)?;

    let mut artifact = String::new();
    for table in &tables {
        artifact.push_str(&render_table(table, opts.row_width)?);
    }
    w.write_all(artifact.as_bytes())?;
    w.flush()?;
    log::debug!("[emit] wrote {} table(s), {} bytes", tables.len(), artifact.len());
    Ok(())
}
