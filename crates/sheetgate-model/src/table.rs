#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::Cell;
use crate::casefold::eq_ignore_case;

static EMPTY_CELL: Cell = Cell::Empty;

/// A grid of typed cells in source order. Row 0 is the header row.
///
/// Every row and cell index is addressable: reading past the end yields an
/// empty row or [`Cell::Empty`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTable {
    rows: Vec<Vec<Cell>>,
}

impl NormalizedTable {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> &[Cell] {
        self.rows.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn cell(&self, row: usize, column: usize) -> &Cell {
        self.row(row).get(column).unwrap_or(&EMPTY_CELL)
    }

    /// True when every cell of the row is `Empty` (or the row does not exist).
    pub fn is_blank_row(&self, index: usize) -> bool {
        self.row(index).iter().all(Cell::is_empty)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub table: NormalizedTable,
}

impl Sheet {
    pub fn new(name: impl Into<String>, table: NormalizedTable) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }
}

/// Loader output: the sheets of one document, in container order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    pub fn single(name: impl Into<String>, table: NormalizedTable) -> Self {
        Self::new(vec![Sheet::new(name, table)])
    }

    /// Case-insensitive sheet lookup; the first matching sheet wins.
    pub fn sheet(&self, name: &str) -> Option<&NormalizedTable> {
        self.sheets
            .iter()
            .find(|sheet| eq_ignore_case(&sheet.name, name))
            .map(|sheet| &sheet.table)
    }

    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|sheet| sheet.name.as_str())
    }
}
