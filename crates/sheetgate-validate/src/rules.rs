//! Per-cell predicates.
//!
//! A predicate looks at one cell and either accepts it or returns the
//! failure message. Predicates never fail on odd input: a cell that cannot
//! be interpreted simply does not satisfy the rule.

use std::fmt;

use serde::{Deserialize, Serialize};

use sheetgate_model::Cell;

/// A check applied to every data cell of one column.
pub trait CellPredicate: fmt::Debug + Send + Sync {
    /// Return the failure message for `cell`, or `None` if it is acceptable.
    fn check(&self, column: &str, cell: &Cell) -> Option<String>;
}

/// Built-in rules available from schema configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRule {
    /// Cell must have visible content.
    NonBlank,
    /// Cell must read as a number greater than zero.
    PositiveNumber,
}

impl CellPredicate for ColumnRule {
    fn check(&self, column: &str, cell: &Cell) -> Option<String> {
        match self {
            Self::NonBlank => cell.is_blank().then(|| format!("{column} required")),
            Self::PositiveNumber => match cell.as_number() {
                Some(value) if value > 0.0 => None,
                _ => Some(format!("{column} must be > 0")),
            },
        }
    }
}
