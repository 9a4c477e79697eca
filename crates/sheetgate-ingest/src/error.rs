#![deny(unsafe_code)]

/// Failure to turn a byte stream into a workbook.
///
/// Loading is all-or-nothing: no partial workbook accompanies an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("malformed document: {reason}")]
    Malformed { reason: String },
}

impl LoadError {
    pub(crate) fn malformed(context: &str, cause: impl std::fmt::Display) -> Self {
        Self::Malformed {
            reason: format!("{context}: {cause}"),
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            Self::Malformed { reason } => reason,
        }
    }
}
