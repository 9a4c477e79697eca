//! Validation of a workbook against a [`SheetSchema`].
//!
//! Checks run in a fixed order and the first structural failure stops the
//! run, so a wrong sheet or a broken header row yields one focused
//! diagnostic instead of a diagnostic for every data cell:
//!
//! 1. the schema's sheet must exist
//! 2. row 0 (the header row) must have content
//! 3. every declared column must have a header; all missing headers are
//!    reported together
//! 4. each non-blank data row is checked column by column, in schema order
//!
//! Validation is a pure function of its inputs. It never fails; problems
//! with the data are reported as [`Diagnostic`]s.

use tracing::{debug, info_span};

use sheetgate_model::{Cell, Diagnostic, NormalizedTable, ValidationResult, Workbook};

use crate::lookup::HeaderIndex;
use crate::schema::{ColumnSchema, SheetSchema};

const HEADER_ROW: usize = 0;
const MISSING_HEADER: &str = "Missing header";
const HEADER_ROW_MISSING: &str = "Header row missing";

/// Validate the schema's sheet of `workbook`.
pub fn validate(workbook: &Workbook, schema: &SheetSchema) -> ValidationResult {
    let span = info_span!("validate", sheet = %schema.sheet_name());
    let _guard = span.enter();

    let Some(table) = workbook.sheet(schema.sheet_name()) else {
        debug!(
            available = ?workbook.sheet_names().collect::<Vec<_>>(),
            "required sheet not present"
        );
        return ValidationResult::new(vec![Diagnostic::structural(format!(
            "Sheet '{}' not found",
            schema.sheet_name()
        ))]);
    };
    check_table(table, schema)
}

/// Validate a table whose sheet has already been selected.
pub fn validate_table(table: &NormalizedTable, schema: &SheetSchema) -> ValidationResult {
    let span = info_span!("validate", sheet = %schema.sheet_name());
    let _guard = span.enter();
    check_table(table, schema)
}

fn check_table(table: &NormalizedTable, schema: &SheetSchema) -> ValidationResult {
    if table.is_blank_row(HEADER_ROW) {
        return ValidationResult::new(vec![Diagnostic::structural(HEADER_ROW_MISSING)]);
    }

    let columns = match resolve_columns(table.row(HEADER_ROW), schema) {
        Ok(columns) => columns,
        Err(missing) => {
            debug!(missing = missing.len(), "header resolution failed");
            return ValidationResult::new(missing);
        }
    };

    let mut diagnostics = Vec::new();
    let mut checked = 0usize;
    for row in (HEADER_ROW + 1)..table.row_count() {
        if table.is_blank_row(row) {
            continue;
        }
        checked += 1;
        for (column, index) in &columns {
            diagnostics.extend(check_cell(row, column, table.cell(row, *index)));
        }
    }
    debug!(
        rows = checked,
        diagnostics = diagnostics.len(),
        "row checks complete"
    );
    ValidationResult::new(diagnostics)
}

/// Resolve every declared column against the header row. Missing headers
/// are collected in schema order rather than stopping at the first one.
fn resolve_columns<'a>(
    header: &[Cell],
    schema: &'a SheetSchema,
) -> Result<Vec<(&'a ColumnSchema, usize)>, Vec<Diagnostic>> {
    let index = HeaderIndex::from_row(header);
    let mut resolved = Vec::with_capacity(schema.columns().len());
    let mut missing = Vec::new();
    for column in schema.columns() {
        match index.get(column.name()) {
            Some(position) => resolved.push((column, position)),
            None => missing.push(Diagnostic::new(HEADER_ROW, column.name(), MISSING_HEADER)),
        }
    }
    if missing.is_empty() {
        Ok(resolved)
    } else {
        Err(missing)
    }
}

fn check_cell(row: usize, column: &ColumnSchema, cell: &Cell) -> Option<Diagnostic> {
    column
        .check(cell)
        .map(|message| Diagnostic::new(row, column.name(), message))
}
