use tracing::{info_span, warn};

use sheetgate_model::Workbook;

use crate::csv_table::read_csv_workbook;
use crate::spreadsheet::read_spreadsheet;
use crate::{ContainerFormat, LoadError};

/// Load a fully buffered spreadsheet container.
pub fn load(bytes: &[u8]) -> Result<Workbook, LoadError> {
    load_with_format(bytes, &ContainerFormat::Spreadsheet)
}

/// Load a fully buffered document with an explicit container format.
pub fn load_with_format(bytes: &[u8], format: &ContainerFormat) -> Result<Workbook, LoadError> {
    let span = info_span!("load", bytes = bytes.len(), ?format);
    let _guard = span.enter();
    let result = match format {
        ContainerFormat::Spreadsheet => read_spreadsheet(bytes),
        ContainerFormat::Csv { sheet_name } => read_csv_workbook(bytes, sheet_name),
    };
    if let Err(error) = &result {
        warn!(%error, "document could not be loaded");
    }
    result
}
