use serde::Serialize;

use sheetgate_model::{Diagnostic, ValidationResult};

use crate::variables::{HAS_ERRORS_VARIABLE, ISSUES_VARIABLE, ProcessVariables};

/// Which way an exclusive gateway should route the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    Valid,
    Invalid,
}

/// The projection of a [`ValidationResult`] an orchestration engine needs:
/// a flag to branch on and the issues to show a reviewer.
///
/// Always derived from a result, never stored alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateDecision {
    #[serde(rename = "hasErrors")]
    has_errors: bool,
    #[serde(rename = "issues")]
    issue_summaries: Vec<String>,
}

impl GateDecision {
    /// A failing decision carrying the given issue lines.
    pub fn rejected(issues: Vec<String>) -> Self {
        Self {
            has_errors: true,
            issue_summaries: issues,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    pub fn issue_summaries(&self) -> &[String] {
        &self.issue_summaries
    }

    pub fn branch(&self) -> Branch {
        if self.has_errors {
            Branch::Invalid
        } else {
            Branch::Valid
        }
    }

    /// The `hasErrors` and `issues` variables, ready to hand over in one
    /// piece.
    pub fn process_variables(&self) -> ProcessVariables {
        let mut variables = ProcessVariables::new();
        variables.insert(HAS_ERRORS_VARIABLE.to_string(), self.has_errors.into());
        variables.insert(
            ISSUES_VARIABLE.to_string(),
            self.issue_summaries.clone().into(),
        );
        variables
    }
}

/// `Row <row> [<column>]: <message>`
pub fn format_issue(diagnostic: &Diagnostic) -> String {
    format!(
        "Row {} [{}]: {}",
        diagnostic.row(),
        diagnostic.column(),
        diagnostic.message()
    )
}

/// Project a validation result onto the gate contract, keeping diagnostic
/// order.
pub fn to_gate_variables(result: &ValidationResult) -> GateDecision {
    GateDecision {
        has_errors: result.has_errors(),
        issue_summaries: result.diagnostics().iter().map(format_issue).collect(),
    }
}
