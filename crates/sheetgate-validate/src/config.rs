#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::rules::ColumnRule;

/// On-disk form of a [`crate::SheetSchema`].
///
/// ```toml
/// sheet = "Resources"
///
/// [[columns]]
/// name = "Rate"
/// rule = "positive_number"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaConfig {
    pub sheet: String,
    pub columns: Vec<ColumnConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnConfig {
    pub name: String,
    pub rule: ColumnRule,
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn default_required() -> bool {
    true
}
