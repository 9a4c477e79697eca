use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use sheetgate_gate::{GateDecision, to_gate_variables};
use sheetgate_ingest::{ContainerFormat, load_with_format};
use sheetgate_model::ValidationResult;
use sheetgate_validate::{SheetSchema, validate};

use crate::cli::{SchemaArgs, ValidateArgs};

/// Everything produced by one `validate` run.
#[derive(Debug)]
pub struct ValidateOutcome {
    pub file: PathBuf,
    pub sheet: String,
    pub result: ValidationResult,
    pub decision: GateDecision,
}

/// The supplied schema file, or the built-in Resources schema.
pub fn load_schema(path: Option<&Path>) -> Result<SheetSchema> {
    match path {
        Some(path) => SheetSchema::from_toml_path(path)
            .with_context(|| format!("load schema: {}", path.display())),
        None => Ok(SheetSchema::resources()),
    }
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidateOutcome> {
    let span = info_span!("validate_file", file = %args.file.display());
    let _guard = span.enter();

    let schema = load_schema(args.schema.as_deref())?;
    let bytes =
        std::fs::read(&args.file).with_context(|| format!("read: {}", args.file.display()))?;
    let format = ContainerFormat::from_path(&args.file);
    debug!(?format, bytes = bytes.len(), "read document");

    let workbook = load_with_format(&bytes, &format)
        .with_context(|| format!("load document: {}", args.file.display()))?;
    let result = validate(&workbook, &schema);
    let decision = to_gate_variables(&result);
    info!(
        sheet = schema.sheet_name(),
        diagnostics = result.len(),
        "validated document"
    );

    Ok(ValidateOutcome {
        file: args.file.clone(),
        sheet: schema.sheet_name().to_string(),
        result,
        decision,
    })
}

pub fn run_schema(args: &SchemaArgs) -> Result<String> {
    let schema = load_schema(args.schema.as_deref())?;
    schema.to_toml_string().context("render schema")
}
