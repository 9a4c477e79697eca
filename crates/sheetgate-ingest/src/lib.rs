#![deny(unsafe_code)]

pub mod csv_table;
pub mod error;
pub mod format;
pub mod loader;
pub mod spreadsheet;

pub use error::LoadError;
pub use format::ContainerFormat;
pub use loader::{load, load_with_format};
