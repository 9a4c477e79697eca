//! Boundary between validation and a process-orchestration engine.
//!
//! The engine consumes exactly two process variables, [`HAS_ERRORS_VARIABLE`]
//! and [`ISSUES_VARIABLE`]. Gateway conditions refer to them by name, so
//! the names are part of the contract and must not change.

#![deny(unsafe_code)]

pub mod decision;
pub mod step;
pub mod variables;

pub use decision::{Branch, GateDecision, format_issue, to_gate_variables};
pub use step::{FILE_PATH_VARIABLE, ParseValidateStep, StepError, UPLOAD_NOT_FOUND};
pub use variables::{HAS_ERRORS_VARIABLE, ISSUES_VARIABLE, ProcessVariables, VariableSink};
