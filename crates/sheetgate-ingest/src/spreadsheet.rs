//! Spreadsheet containers (xlsx, xlsm, xlsb, xls, ods).
//!
//! Decoding is delegated to `calamine`; this module only maps its cell model
//! onto [`Cell`] and keeps absolute row/column positions intact.

use std::io::Cursor;

use calamine::{Data, Range, Reader, SheetType, open_workbook_auto_from_rs};
use tracing::debug;

use sheetgate_model::{Cell, NormalizedTable, Sheet, Workbook};

use crate::LoadError;

/// Decode every worksheet of a spreadsheet container, in workbook order.
pub fn read_spreadsheet(bytes: &[u8]) -> Result<Workbook, LoadError> {
    let mut reader = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|error| LoadError::malformed("open spreadsheet", error))?;

    // Chart, dialog and macro sheets carry no cell grid.
    let names: Vec<String> = reader
        .sheets_metadata()
        .iter()
        .filter(|sheet| sheet.typ == SheetType::WorkSheet)
        .map(|sheet| sheet.name.clone())
        .collect();

    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let range = reader
            .worksheet_range(&name)
            .map_err(|error| LoadError::malformed(&format!("read sheet '{name}'"), error))?;
        let table = table_from_range(&range);
        debug!(sheet = %name, rows = table.row_count(), "decoded worksheet");
        sheets.push(Sheet::new(name, table));
    }
    Ok(Workbook::new(sheets))
}

/// Materialize a used range as a table anchored at A1.
///
/// Row 0 is always the sheet's first row. Rows above the used range stay
/// empty and each row is only as wide as its last used cell; reads past
/// either end yield [`Cell::Empty`].
pub fn table_from_range(range: &Range<Data>) -> NormalizedTable {
    let (Some((start_row, start_col)), Some((end_row, _))) = (range.start(), range.end()) else {
        return NormalizedTable::default();
    };
    let (start_row, start_col) = (start_row as usize, start_col as usize);
    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); end_row as usize + 1];
    for (row, col, data) in range.used_cells() {
        let cells = &mut rows[start_row + row];
        let col = start_col + col;
        if cells.len() <= col {
            cells.resize(col + 1, Cell::Empty);
        }
        cells[col] = cell_from_data(data);
    }
    NormalizedTable::new(rows)
}

/// Map a decoded cell to its normalized variant.
pub fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Int(value) => Cell::Number(*value as f64),
        Data::Float(value) => Cell::Number(*value),
        // Date/time cells are numeric serials with a display format.
        Data::DateTime(value) => Cell::Number(value.as_f64()),
        Data::Bool(value) => Cell::Boolean(*value),
        Data::String(value) | Data::DateTimeIso(value) | Data::DurationIso(value) => {
            Cell::String(value.clone())
        }
        Data::Error(error) => Cell::String(error.to_string()),
        Data::Empty => Cell::Empty,
    }
}

#[cfg(test)]
mod tests {
    use calamine::CellErrorType;

    use super::*;

    #[test]
    fn coerces_each_kind_once() {
        assert_eq!(cell_from_data(&Data::Int(10)), Cell::Number(10.0));
        assert_eq!(cell_from_data(&Data::Float(-5.5)), Cell::Number(-5.5));
        assert_eq!(cell_from_data(&Data::Bool(true)), Cell::Boolean(true));
        assert_eq!(
            cell_from_data(&Data::String("USD".to_string())),
            Cell::text("USD")
        );
        assert_eq!(
            cell_from_data(&Data::Error(CellErrorType::Div0)),
            Cell::text("#DIV/0!")
        );
        assert_eq!(cell_from_data(&Data::Empty), Cell::Empty);
    }

    #[test]
    fn keeps_absolute_positions() {
        // Used range starts at B2; A1 and the first column must still exist.
        let mut range = Range::new((1, 1), (2, 2));
        range.set_value((1, 1), Data::String("Rate".to_string()));
        range.set_value((2, 2), Data::Float(12.5));

        let table = table_from_range(&range);

        assert_eq!(table.row_count(), 3);
        assert!(table.is_blank_row(0));
        assert_eq!(table.cell(1, 0), &Cell::Empty);
        assert_eq!(table.cell(1, 1), &Cell::text("Rate"));
        assert_eq!(table.cell(2, 2), &Cell::Number(12.5));
    }

    #[test]
    fn far_anchored_range_stays_sparse() {
        let mut range = Range::new((2000, 16383), (2000, 16383));
        range.set_value((2000, 16383), Data::Float(1.0));

        let table = table_from_range(&range);

        assert_eq!(table.row_count(), 2001);
        assert!(table.row(0).is_empty());
        assert!(table.row(1999).is_empty());
        assert_eq!(table.cell(2000, 16383), &Cell::Number(1.0));
        let materialized: usize = table.rows().map(<[Cell]>::len).sum();
        assert_eq!(materialized, 16384);
    }

    #[test]
    fn unused_rows_inside_range_are_blank() {
        let mut range = Range::new((0, 0), (2, 1));
        range.set_value((0, 0), Data::String("Rate".to_string()));
        range.set_value((2, 1), Data::Int(3));

        let table = table_from_range(&range);

        assert!(table.is_blank_row(1));
        assert!(table.row(1).is_empty());
        assert_eq!(table.row(0).len(), 1);
        assert_eq!(table.cell(2, 1), &Cell::Number(3.0));
    }

    #[test]
    fn empty_range_is_empty_table() {
        let range: Range<Data> = Range::empty();
        assert!(table_from_range(&range).is_empty());
    }

    #[test]
    fn garbage_bytes_are_malformed() {
        let error = read_spreadsheet(b"definitely not a workbook").unwrap_err();
        assert!(matches!(error, LoadError::Malformed { .. }));
        assert!(error.reason().starts_with("open spreadsheet"));
    }
}
