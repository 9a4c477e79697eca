//! The parse-and-validate service task.
//!
//! An orchestration engine runs this step with the upload location it was
//! started with (the `filePath` variable) and branches on the variables it
//! produces. A missing upload is an ordinary failed validation; a document
//! that cannot be read or decoded is a [`StepError`], which callers must not
//! treat as `hasErrors = true`.

use std::path::{Path, PathBuf};

use tracing::{info, info_span, warn};

use sheetgate_ingest::{ContainerFormat, LoadError, load_with_format};
use sheetgate_validate::{SheetSchema, validate};

use crate::decision::{GateDecision, to_gate_variables};
use crate::variables::VariableSink;

/// Process variable holding the upload location.
pub const FILE_PATH_VARIABLE: &str = "filePath";

/// Issue line reported when the upload location does not point at a file.
pub const UPLOAD_NOT_FOUND: &str = "Uploaded file not found";

#[derive(Debug, thiserror::Error)]
pub enum StepError {
    #[error("failed to read upload {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Load(#[from] LoadError),
}

#[derive(Debug, Clone, Default)]
pub struct ParseValidateStep {
    schema: SheetSchema,
}

impl ParseValidateStep {
    pub fn new(schema: SheetSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &SheetSchema {
        &self.schema
    }

    /// Validate the upload at `upload` and derive the gate decision.
    pub fn decide(&self, upload: Option<&Path>) -> Result<GateDecision, StepError> {
        let Some(path) = upload.filter(|path| path.is_file()) else {
            warn!(upload = ?upload, "upload not found");
            return Ok(GateDecision::rejected(vec![UPLOAD_NOT_FOUND.to_string()]));
        };
        let span = info_span!("parse_validate", path = %path.display());
        let _guard = span.enter();

        let bytes = std::fs::read(path).map_err(|source| StepError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.decide_bytes(&bytes, &ContainerFormat::from_path(path))
    }

    /// Validate an in-memory document and derive the gate decision.
    pub fn decide_bytes(
        &self,
        bytes: &[u8],
        format: &ContainerFormat,
    ) -> Result<GateDecision, StepError> {
        let workbook = load_with_format(bytes, format)?;
        let result = validate(&workbook, &self.schema);
        let decision = to_gate_variables(&result);
        info!(
            has_errors = decision.has_errors(),
            issues = decision.issue_summaries().len(),
            "validation finished"
        );
        Ok(decision)
    }

    /// Run the step and publish its variables to `sink`.
    ///
    /// Nothing is published when the step fails.
    pub fn execute(
        &self,
        upload: Option<&Path>,
        sink: &mut dyn VariableSink,
    ) -> Result<GateDecision, StepError> {
        let decision = self.decide(upload)?;
        sink.set_variables(decision.process_variables());
        Ok(decision)
    }
}
