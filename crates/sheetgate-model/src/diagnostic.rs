use serde::{Deserialize, Serialize};

/// Column marker for diagnostics that are not tied to a specific column.
pub const STRUCTURAL_COLUMN: &str = "-";

/// One validation failure with row and column context.
///
/// Row 0 marks header or structural problems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    row: usize,
    column: String,
    message: String,
}

impl Diagnostic {
    pub fn new(row: usize, column: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            row,
            column: column.into(),
            message: message.into(),
        }
    }

    /// A row-0 diagnostic that is not about any particular column.
    pub fn structural(message: impl Into<String>) -> Self {
        Self::new(0, STRUCTURAL_COLUMN, message)
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_structural(&self) -> bool {
        self.row == 0
    }
}

/// Outcome of one validation run.
///
/// `has_errors` is derived from the diagnostics at construction and the
/// result is never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl ValidationResult {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        let has_errors = !diagnostics.is_empty();
        Self {
            diagnostics,
            has_errors,
        }
    }

    pub fn valid() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
