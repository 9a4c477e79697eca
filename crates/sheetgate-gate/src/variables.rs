/// Boolean process variable an exclusive gateway branches on.
pub const HAS_ERRORS_VARIABLE: &str = "hasErrors";

/// Ordered list of issue lines shown on the review task.
pub const ISSUES_VARIABLE: &str = "issues";

/// Process variables keyed by name.
pub type ProcessVariables = serde_json::Map<String, serde_json::Value>;

/// Receives the variables of one validation run.
///
/// Implementations adapt a concrete orchestration engine. The variables of a
/// run arrive in a single call, so a consumer never observes a run with only
/// one of them set.
pub trait VariableSink {
    fn set_variables(&mut self, variables: ProcessVariables);
}

impl VariableSink for ProcessVariables {
    fn set_variables(&mut self, variables: ProcessVariables) {
        self.extend(variables);
    }
}
