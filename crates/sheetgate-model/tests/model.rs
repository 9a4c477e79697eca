//! Tests for sheetgate-model types.

use sheetgate_model::{
    Cell, Diagnostic, NormalizedTable, STRUCTURAL_COLUMN, Sheet, ValidationResult, Workbook,
};

fn table(rows: Vec<Vec<Cell>>) -> NormalizedTable {
    NormalizedTable::new(rows)
}

#[test]
fn out_of_range_reads_are_empty() {
    let t = table(vec![vec![Cell::text("ProjectCode"), Cell::text("Rate")]]);

    assert_eq!(t.cell(0, 1), &Cell::text("Rate"));
    assert_eq!(t.cell(0, 9), &Cell::Empty);
    assert_eq!(t.cell(42, 0), &Cell::Empty);
    assert!(t.row(42).is_empty());
    assert!(t.is_blank_row(42));
}

#[test]
fn blank_row_means_all_cells_empty() {
    let t = table(vec![
        vec![Cell::text("A")],
        vec![Cell::Empty, Cell::Empty],
        vec![Cell::Empty, Cell::text("  ")],
    ]);

    assert!(t.is_blank_row(1));
    // A whitespace string is content, not structural absence.
    assert!(!t.is_blank_row(2));
}

#[test]
fn sheet_lookup_ignores_case() {
    let workbook = Workbook::new(vec![
        Sheet::new("Summary", NormalizedTable::default()),
        Sheet::new("RESOURCES", table(vec![vec![Cell::text("x")]])),
    ]);

    assert!(workbook.sheet("resources").is_some());
    assert!(workbook.sheet("Resources").is_some());
    assert!(workbook.sheet("Other").is_none());
    assert_eq!(workbook.sheet_names().collect::<Vec<_>>(), ["Summary", "RESOURCES"]);
}

#[test]
fn sheet_lookup_folds_one_char_at_a_time() {
    let workbook = Workbook::single("Straße", NormalizedTable::default());

    assert!(workbook.sheet("STRAßE").is_some());
    assert!(workbook.sheet("STRASSE").is_none());
}

#[test]
fn has_errors_follows_diagnostics() {
    assert!(!ValidationResult::new(vec![]).has_errors());
    assert!(!ValidationResult::valid().has_errors());

    let result = ValidationResult::new(vec![Diagnostic::structural("Header row missing")]);
    assert!(result.has_errors());
    assert_eq!(result.len(), 1);
    assert_eq!(result.diagnostics()[0].column(), STRUCTURAL_COLUMN);
    assert!(result.diagnostics()[0].is_structural());
}

#[test]
fn result_serializes_with_flag() {
    let result = ValidationResult::new(vec![Diagnostic::new(1, "Rate", "Rate must be > 0")]);
    let json = serde_json::to_value(&result).expect("serialize result");

    assert_eq!(json["has_errors"], serde_json::json!(true));
    assert_eq!(json["diagnostics"][0]["row"], serde_json::json!(1));
    assert_eq!(json["diagnostics"][0]["column"], serde_json::json!("Rate"));
}

#[test]
fn cell_serializes_tagged() {
    let json = serde_json::to_string(&Cell::Number(10.0)).expect("serialize cell");
    assert_eq!(json, r#"{"kind":"number","value":10.0}"#);
    let back: Cell = serde_json::from_str(r#"{"kind":"empty"}"#).expect("deserialize cell");
    assert_eq!(back, Cell::Empty);
}
