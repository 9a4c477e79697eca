#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("failed to read schema file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML schema {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse TOML schema: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to render schema as TOML: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("invalid schema: {message}")]
    Invalid { message: String },

    #[error("column {column} uses a custom predicate and cannot be written as configuration")]
    CustomPredicate { column: String },
}

impl SchemaError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}
