#![deny(unsafe_code)]

pub mod casefold;
pub mod cell;
pub mod diagnostic;
pub mod table;

pub use casefold::{eq_ignore_case, fold_case};
pub use cell::Cell;
pub use diagnostic::{Diagnostic, STRUCTURAL_COLUMN, ValidationResult};
pub use table::{NormalizedTable, Sheet, Workbook};
