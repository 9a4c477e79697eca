#![deny(unsafe_code)]

pub mod config;
pub mod engine;
pub mod error;
pub mod lookup;
pub mod rules;
pub mod schema;

pub use config::{ColumnConfig, SchemaConfig};
pub use engine::{validate, validate_table};
pub use error::SchemaError;
pub use lookup::HeaderIndex;
pub use rules::{CellPredicate, ColumnRule};
pub use schema::{ColumnSchema, DEFAULT_SHEET_NAME, SheetSchema};
