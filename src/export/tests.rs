use std::sync::OnceLock;

use crate::export::{ExportedTable, emit_awk, emit_rust, from_json, to_json};
use crate::expression::ShapeSet;
use crate::table::{LookupTable, TableBuilder, TableError, TableQuery};

fn table() -> &'static LookupTable {
    static TABLE: OnceLock<LookupTable> = OnceLock::new();
    TABLE.get_or_init(|| match TableBuilder::default().build() {
        Ok(table) => table,
        Err(err) => panic!("table build failed: {}", err),
    })
}

#[test]
fn test_export_keeps_only_populated_keys() {
    let exported = ExportedTable::from_table(table());
    assert_eq!(exported.entries.len(), 540);
    assert_eq!(exported.target, 10);
    assert_eq!(exported.shapes, ShapeSet::Classic);
    assert!(!exported.entries.contains_key(&0));
    assert_eq!(
        exported.entries.get(&9999),
        Some(&vec!["((9*9)+9)/9".to_string()])
    );
}

#[test]
fn test_json_round_trip_restores_identical_table() {
    let json = match to_json(table()) {
        Ok(json) => json,
        Err(err) => panic!("export failed: {}", err),
    };
    assert!(json.contains("\"shapes\": \"classic\""));
    assert!(json.contains("\"9999\""));

    let restored = match from_json(&json) {
        Ok(restored) => restored,
        Err(err) => panic!("load failed: {}", err),
    };
    assert_eq!(&restored, table());
    assert_eq!(restored.considered(), 715);

    let query = TableQuery::new(&restored);
    assert!(matches!(query.solve(7, 5, 4, 1), Ok(s) if s.len() == 16));
}

#[test]
fn test_json_export_is_deterministic() {
    let first = to_json(table()).ok();
    let second = TableBuilder::default()
        .build()
        .ok()
        .and_then(|rebuilt| to_json(&rebuilt).ok());
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn test_load_rejects_non_canonical_key() {
    let json = r#"{"target": 10, "shapes": "classic", "entries": {"7541": ["(7-5)*(4+1)"]}}"#;
    assert!(matches!(from_json(json), Err(TableError::InvalidExport(_))));
}

#[test]
fn test_load_rejects_unsorted_solutions() {
    let json = r#"{"target": 10, "shapes": "classic", "entries": {"1457": ["b", "a"]}}"#;
    assert!(matches!(from_json(json), Err(TableError::InvalidExport(_))));
}

#[test]
fn test_load_rejects_malformed_json() {
    assert!(matches!(from_json("{ not json"), Err(TableError::Json(_))));
}

#[test]
fn test_awk_script_embeds_table_and_network() {
    let script = emit_awk(table());
    assert!(script.contains("    S[9999] = \"((9*9)+9)/9\""));
    assert!(script.contains("    S[2222] = \"((2*2)*2)+2, ((2+2)*2)+2\""));
    assert!(!script.contains("S[0] ="));
    assert!(!script.contains("S[3478] ="));

    let network = [
        "    if (n1 > n2) { t=n1; n1=n2; n2=t }",
        "    if (n3 > n4) { t=n3; n3=n4; n4=t }",
        "    if (n1 > n3) { t=n1; n1=n3; n3=t }",
        "    if (n2 > n4) { t=n2; n2=n4; n4=t }",
        "    if (n2 > n3) { t=n2; n2=n3; n3=t }",
    ]
    .join("\n");
    assert!(script.contains(&network));
    assert!(script.contains("key = n1*1000 + n2*100 + n3*10 + n4"));
    assert_eq!(script.matches("    S[").count(), 540);
}

#[test]
fn test_rust_source_has_one_slot_per_key() {
    let source = emit_rust(table());
    assert!(source.contains("pub static SOLUTIONS: [&[&str]; 10000] = ["));
    assert_eq!(source.lines().filter(|l| l.starts_with("    &[")).count(), 10_000);
    assert!(source.contains("    &[\"((9*9)+9)/9\"], // 9999"));
    assert!(source.trim_end().ends_with("];"));
}
