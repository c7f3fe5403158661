// src/bin/gen_tables_json.rs
// Build every SIP byte-class table and write them to JSON.
// Usage:
//   cargo run --bin gen_tables_json                # writes tables/sip_tables.json
//   cargo run --bin gen_tables_json -- /path/out.json

use std::{env, fs, path::Path};

use anyhow::{Context, Result};
use sipmap::tables::{ALL_KINDS, EmitOptions, build_tables, save_tables_json};

fn main() -> Result<()> {
    let out = env::args()
        .nth(1)
        .unwrap_or_else(|| "tables/sip_tables.json".to_string());
    let out_path = Path::new(&out);

    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    eprintln!("[gen_tables_json] building {} tables…", ALL_KINDS.len());
    let tables = build_tables(ALL_KINDS, &EmitOptions::default())?;
    for t in &tables {
        let set = t.flags().iter().filter(|&&f| f).count();
        eprintln!("[gen_tables_json] {}: {set}/{} bytes admitted", t.name(), t.len());
    }

    save_tables_json(out_path, &tables)
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    eprintln!("[gen_tables_json] wrote {}", out_path.display());
    Ok(())
}
