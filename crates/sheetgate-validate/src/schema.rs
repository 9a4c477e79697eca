#![deny(unsafe_code)]

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use sheetgate_model::{Cell, fold_case};

use crate::config::{ColumnConfig, SchemaConfig};
use crate::rules::{CellPredicate, ColumnRule};
use crate::SchemaError;

/// Sheet name required by [`SheetSchema::resources`].
pub const DEFAULT_SHEET_NAME: &str = "Resources";

#[derive(Clone)]
enum Predicate {
    Rule(ColumnRule),
    Custom(Arc<dyn CellPredicate>),
}

impl Predicate {
    fn as_dyn(&self) -> &dyn CellPredicate {
        match self {
            Self::Rule(rule) => rule,
            Self::Custom(predicate) => predicate.as_ref(),
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule(rule) => fmt::Debug::fmt(rule, f),
            Self::Custom(predicate) => f.debug_tuple("Custom").field(predicate).finish(),
        }
    }
}

/// One declared column: its header, its rule, and whether blank cells are
/// allowed.
#[derive(Debug, Clone)]
pub struct ColumnSchema {
    name: String,
    required: bool,
    predicate: Predicate,
    message: Option<String>,
}

impl ColumnSchema {
    /// A required column checked by a built-in rule.
    pub fn new(name: impl Into<String>, rule: ColumnRule) -> Self {
        Self {
            name: name.into(),
            required: true,
            predicate: Predicate::Rule(rule),
            message: None,
        }
    }

    /// A required column checked by a caller-supplied predicate.
    pub fn custom(name: impl Into<String>, predicate: impl CellPredicate + 'static) -> Self {
        Self {
            name: name.into(),
            required: true,
            predicate: Predicate::Custom(Arc::new(predicate)),
            message: None,
        }
    }

    /// Blank cells in an optional column are not checked.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Replace the rule's failure text.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn rule(&self) -> Option<ColumnRule> {
        match self.predicate {
            Predicate::Rule(rule) => Some(rule),
            Predicate::Custom(_) => None,
        }
    }

    /// Failure message for `cell`, if any.
    pub fn check(&self, cell: &Cell) -> Option<String> {
        if !self.required && cell.is_blank() {
            return None;
        }
        let message = self.predicate.as_dyn().check(&self.name, cell)?;
        Some(self.message.clone().unwrap_or(message))
    }

    fn to_config(&self) -> Result<ColumnConfig, SchemaError> {
        let rule = self.rule().ok_or_else(|| SchemaError::CustomPredicate {
            column: self.name.clone(),
        })?;
        Ok(ColumnConfig {
            name: self.name.clone(),
            rule,
            required: self.required,
            message: self.message.clone(),
        })
    }
}

/// The sheet and columns a document must provide.
#[derive(Debug, Clone)]
pub struct SheetSchema {
    sheet_name: String,
    columns: Vec<ColumnSchema>,
}

impl SheetSchema {
    pub fn new(sheet_name: impl Into<String>, columns: Vec<ColumnSchema>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            columns,
        }
    }

    /// The resource-rate sheet: project, resource and currency must be
    /// filled in, and the rate must be positive.
    pub fn resources() -> Self {
        Self::new(
            DEFAULT_SHEET_NAME,
            vec![
                ColumnSchema::new("ProjectCode", ColumnRule::NonBlank),
                ColumnSchema::new("ResourceName", ColumnRule::NonBlank),
                ColumnSchema::new("RateCurrency", ColumnRule::NonBlank),
                ColumnSchema::new("Rate", ColumnRule::PositiveNumber),
            ],
        )
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    pub fn columns(&self) -> &[ColumnSchema] {
        &self.columns
    }

    pub fn from_config(config: SchemaConfig) -> Result<Self, SchemaError> {
        if config.sheet.trim().is_empty() {
            return Err(SchemaError::invalid("sheet name is empty"));
        }
        if config.columns.is_empty() {
            return Err(SchemaError::invalid("no columns declared"));
        }
        let mut seen = HashSet::new();
        let mut columns = Vec::with_capacity(config.columns.len());
        for column in config.columns {
            if column.name.trim().is_empty() {
                return Err(SchemaError::invalid("column name is empty"));
            }
            if !seen.insert(fold_case(&column.name)) {
                return Err(SchemaError::invalid(format!(
                    "duplicate column {}",
                    column.name
                )));
            }
            let mut schema =
                ColumnSchema::new(column.name, column.rule).with_required(column.required);
            if let Some(message) = column.message {
                schema = schema.with_message(message);
            }
            columns.push(schema);
        }
        Ok(Self::new(config.sheet, columns))
    }

    pub fn from_toml_str(source: &str) -> Result<Self, SchemaError> {
        let config: SchemaConfig = toml::from_str(source)?;
        Self::from_config(config)
    }

    pub fn from_toml_path(path: &Path) -> Result<Self, SchemaError> {
        let source = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SchemaConfig = toml::from_str(&source).map_err(|source| SchemaError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_config(config)
    }

    /// Configuration form of this schema. Fails for custom predicates.
    pub fn to_config(&self) -> Result<SchemaConfig, SchemaError> {
        let columns = self
            .columns
            .iter()
            .map(ColumnSchema::to_config)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SchemaConfig {
            sheet: self.sheet_name.clone(),
            columns,
        })
    }

    pub fn to_toml_string(&self) -> Result<String, SchemaError> {
        Ok(toml::to_string(&self.to_config()?)?)
    }
}

impl Default for SheetSchema {
    fn default() -> Self {
        Self::resources()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct CurrencyCode;

    impl CellPredicate for CurrencyCode {
        fn check(&self, column: &str, cell: &Cell) -> Option<String> {
            let ok = cell.as_text().is_some_and(|text| {
                text.len() == 3 && text.chars().all(|ch| ch.is_ascii_uppercase())
            });
            (!ok).then(|| format!("{column} must be a 3-letter code"))
        }
    }

    #[test]
    fn optional_column_skips_blank_cells() {
        let column = ColumnSchema::new("Rate", ColumnRule::PositiveNumber).optional();
        assert!(column.check(&Cell::Empty).is_none());
        assert!(column.check(&Cell::text("  ")).is_none());
        assert!(column.check(&Cell::Number(-1.0)).is_some());
    }

    #[test]
    fn message_override_replaces_default() {
        let column = ColumnSchema::new("Rate", ColumnRule::PositiveNumber)
            .with_message("Rate is not billable");
        assert_eq!(
            column.check(&Cell::Number(0.0)).as_deref(),
            Some("Rate is not billable")
        );
        assert!(column.check(&Cell::Number(1.0)).is_none());
    }

    #[test]
    fn custom_predicate_runs_and_cannot_be_rendered() {
        let schema = SheetSchema::new(
            "Resources",
            vec![ColumnSchema::custom("RateCurrency", CurrencyCode)],
        );
        let column = &schema.columns()[0];

        assert!(column.check(&Cell::text("USD")).is_none());
        assert_eq!(
            column.check(&Cell::text("dollars")).as_deref(),
            Some("RateCurrency must be a 3-letter code")
        );
        assert!(column.rule().is_none());
        assert!(matches!(
            schema.to_config(),
            Err(SchemaError::CustomPredicate { .. })
        ));
    }

    #[test]
    fn default_schema_is_resources() {
        let schema = SheetSchema::default();
        assert_eq!(schema.sheet_name(), "Resources");
        let names: Vec<&str> = schema.columns().iter().map(ColumnSchema::name).collect();
        assert_eq!(names, ["ProjectCode", "ResourceName", "RateCurrency", "Rate"]);
        assert!(schema.columns().iter().all(ColumnSchema::is_required));
    }
}
