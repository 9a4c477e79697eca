#![deny(unsafe_code)]

use std::path::Path;

/// How the loader should decode a byte stream.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContainerFormat {
    /// xlsx, xlsm, xlsb, xls or ods; the kind is sniffed from the bytes.
    #[default]
    Spreadsheet,
    /// Delimited text decoded into a single sheet with the given name.
    Csv { sheet_name: String },
}

impl ContainerFormat {
    pub fn csv(sheet_name: impl Into<String>) -> Self {
        Self::Csv {
            sheet_name: sheet_name.into(),
        }
    }

    /// Pick a format from a file name. `.csv` files become a sheet named
    /// after the file stem; everything else is treated as a spreadsheet.
    pub fn from_path(path: &Path) -> Self {
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if !is_csv {
            return Self::Spreadsheet;
        }
        let stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default();
        Self::csv(stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_extension_uses_file_stem() {
        assert_eq!(
            ContainerFormat::from_path(Path::new("/tmp/uploads/Resources.CSV")),
            ContainerFormat::csv("Resources")
        );
    }

    #[test]
    fn other_extensions_are_spreadsheets() {
        for name in ["rates.xlsx", "rates.ods", "rates", "rates.csv.xlsx"] {
            assert_eq!(
                ContainerFormat::from_path(Path::new(name)),
                ContainerFormat::Spreadsheet,
                "{name}"
            );
        }
    }
}
