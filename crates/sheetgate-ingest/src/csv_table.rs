use csv::ReaderBuilder;
use tracing::debug;

use sheetgate_model::{Cell, NormalizedTable, Workbook};

use crate::LoadError;

fn normalize_cell(raw: &str) -> Cell {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        Cell::Empty
    } else {
        Cell::String(trimmed.to_string())
    }
}

/// Decode delimited text into a single-sheet workbook.
///
/// Delimited text has no cell formats, so every non-empty field is a
/// [`Cell::String`]. The first record is row 0. Lines with no bytes at all
/// carry no record and produce no row; lines of empty fields do.
pub fn read_csv_workbook(bytes: &[u8], sheet_name: &str) -> Result<Workbook, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);
    let rows = reader
        .records()
        .map(|record| {
            record
                .map(|record| record.iter().map(normalize_cell).collect())
                .map_err(|error| LoadError::malformed("read csv record", error))
        })
        .collect::<Result<Vec<Vec<Cell>>, _>>()?;
    let table = NormalizedTable::new(rows);
    debug!(sheet = %sheet_name, rows = table.row_count(), "decoded csv");
    Ok(Workbook::single(sheet_name, table))
}
