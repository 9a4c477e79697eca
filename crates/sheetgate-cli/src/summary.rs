use anyhow::Result;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use sheetgate_model::{Diagnostic, STRUCTURAL_COLUMN};

use crate::cli::ReportFormatArg;
use crate::commands::ValidateOutcome;

pub fn render_report(outcome: &ValidateOutcome, format: ReportFormatArg) -> Result<String> {
    let rendered = match format {
        ReportFormatArg::Table => render_table(outcome),
        ReportFormatArg::Json => serde_json::to_string_pretty(&outcome.result)?,
        ReportFormatArg::Variables => {
            serde_json::to_string_pretty(&outcome.decision.process_variables())?
        }
    };
    Ok(rendered)
}

pub fn render_table(outcome: &ValidateOutcome) -> String {
    let mut lines = vec![
        format!("File: {}", outcome.file.display()),
        format!("Sheet: {}", outcome.sheet),
    ];
    if outcome.result.has_errors() {
        lines.push(format!(
            "Status: INVALID ({} issue(s))",
            outcome.result.len()
        ));
        lines.push(issue_table(outcome.result.diagnostics()).to_string());
    } else {
        lines.push("Status: VALID".to_string());
    }
    lines.join("\n")
}

fn issue_table(diagnostics: &[Diagnostic]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for diagnostic in diagnostics {
        table.add_row(vec![
            row_cell(diagnostic.row()),
            column_cell(diagnostic.column()),
            Cell::new(diagnostic.message()).fg(Color::Red),
        ]);
    }
    table
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120)
        .set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Percentage(60)),
        ]);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn row_cell(row: usize) -> Cell {
    // Row 0 is the header/structure, not a data row.
    if row == 0 {
        dim_cell(row)
    } else {
        Cell::new(row)
    }
}

fn column_cell(column: &str) -> Cell {
    if column == STRUCTURAL_COLUMN {
        dim_cell(column)
    } else {
        Cell::new(column)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
