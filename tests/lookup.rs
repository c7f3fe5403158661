//! The compile-time tables, `byte_map!`, and JSON persistence all agree with
//! the emitter.

use std::{fs, process};

use sipmap::{
    TableError, byte_map, lookup,
    tables::{
        ALL_KINDS, EmitOptions, LookupTable, TableKind, build_table, build_tables,
        load_table_json_bytes, render_table, save_table_json, save_tables_json,
    },
};

// First two rows of an emitted TOKEN_MAP, pasted verbatim.
static TOKEN_HEAD: [bool; 32] = byte_map![
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

#[test]
fn baked_tables_match_built_tables() {
    for &kind in ALL_KINDS {
        let built = build_table(kind, 256).unwrap();
        assert_eq!(built.flags(), kind.baked().as_slice(), "{kind}");
    }
}

#[test]
fn accessors_index_baked_tables() {
    for b in 0u8..=255 {
        assert_eq!(lookup::is_token(b), lookup::TOKEN_MAP[b as usize]);
        assert_eq!(lookup::is_request_uri(b), lookup::REQUEST_URI_MAP[b as usize]);
        assert_eq!(lookup::is_reason_phrase(b), lookup::REASON_PHRASE_MAP[b as usize]);
        assert_eq!(lookup::is_header_value(b), lookup::HEADER_VALUE_MAP[b as usize]);
    }
    assert!(lookup::is_token(b'I'));
    assert!(!lookup::is_token(b':'));
    assert!(lookup::is_request_uri(b':'));
}

#[test]
fn byte_map_reads_emitted_rows() {
    assert_eq!(TOKEN_HEAD.as_slice(), &lookup::TOKEN_MAP[..32]);
    assert_eq!(byte_map![1, 0, 1,], [true, false, true]);
}

#[test]
fn rendered_body_is_valid_byte_map_input() {
    // Each rendered row is a run of `0,`/`1,` entries byte_map! accepts.
    let table = build_table(TableKind::Token, 256).unwrap();
    let text = render_table(&table, 16).unwrap();
    let flags: Vec<bool> = text
        .lines()
        .skip(1)
        .take_while(|l| *l != "];")
        .flat_map(|l| l.split(','))
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(|e| e != "0")
        .collect();
    assert_eq!(flags.as_slice(), lookup::TOKEN_MAP.as_slice());
}

#[test]
fn json_round_trip() {
    let table = build_table(TableKind::ReasonPhrase, 256).unwrap();
    let bytes = serde_json::to_vec(&table).unwrap();
    let text = String::from_utf8(bytes.clone()).unwrap();
    assert!(text.contains("\"REASON_PHRASE_MAP\""), "{text}");

    let back = load_table_json_bytes(&bytes).unwrap();
    assert_eq!(back, table);

    let path = std::env::temp_dir().join(format!("sipmap_{}_reason.json", process::id()));
    save_table_json(&path, &table).unwrap();
    let on_disk = load_table_json_bytes(&fs::read(&path).unwrap()).unwrap();
    let _ = fs::remove_file(&path);
    assert_eq!(on_disk, table);
}

#[test]
fn json_array_keeps_order() {
    let tables = build_tables(ALL_KINDS, &EmitOptions::default()).unwrap();
    let path = std::env::temp_dir().join(format!("sipmap_{}_all.json", process::id()));
    save_tables_json(&path, &tables).unwrap();
    let data = fs::read(&path).unwrap();
    let _ = fs::remove_file(&path);

    let back: Vec<LookupTable> = serde_json::from_slice(&data).unwrap();
    let names: Vec<TableKind> = back.iter().map(|t| t.name()).collect();
    assert_eq!(names, ALL_KINDS);
    assert_eq!(back, tables);
}

#[test]
fn malformed_json_is_an_error() {
    assert!(load_table_json_bytes(b"{\"name\":\"BOGUS_MAP\",\"flags\":[]}").is_err());
    assert!(load_table_json_bytes(b"not json").is_err());

    let empty = load_table_json_bytes(br#"{"name":"TOKEN_MAP","flags":[]}"#).unwrap_err();
    assert!(matches!(empty, TableError::InvalidDomainSize(_)), "{empty}");

    // NUL is not a token char, so entry 0 must be false.
    let wrong =
        load_table_json_bytes(br#"{"name":"TOKEN_MAP","flags":[true,true,true]}"#).unwrap_err();
    assert!(
        matches!(wrong, TableError::TableMismatch { name: TableKind::Token, index: 0 }),
        "{wrong}"
    );

    // A correct prefix of the domain is fine.
    let head = load_table_json_bytes(br#"{"name":"TOKEN_MAP","flags":[false,false,false]}"#)
        .unwrap();
    assert_eq!(head.flags(), &lookup::TOKEN_MAP[..3]);
}

#[test]
fn tampered_entry_in_saved_table_is_rejected() {
    let table = build_table(TableKind::HeaderValue, 256).unwrap();
    let mut value = serde_json::to_value(&table).unwrap();
    value["flags"][0xFE_usize] = serde_json::Value::Bool(true);
    let bytes = serde_json::to_vec(&value).unwrap();

    let err = load_table_json_bytes(&bytes).unwrap_err();
    assert!(
        matches!(err, TableError::TableMismatch { name: TableKind::HeaderValue, index: 0xFE }),
        "{err}"
    );
    // The array form goes through the same check.
    let array = format!("[{}]", String::from_utf8(bytes).unwrap());
    assert!(serde_json::from_str::<Vec<LookupTable>>(&array).is_err());
}
