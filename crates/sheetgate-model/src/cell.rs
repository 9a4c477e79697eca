#![deny(unsafe_code)]

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single typed cell of a normalized table.
///
/// The variant is decided once when the document is loaded; validation only
/// ever matches on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Cell {
    String(String),
    Number(f64),
    Boolean(bool),
    #[default]
    Empty,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// True for `Empty` and for strings with no visible content.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::String(value) => value.trim().is_empty(),
            Self::Number(_) | Self::Boolean(_) => false,
        }
    }

    /// Textual view of the cell. Numbers and booleans are rendered.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::String(value) => Some(Cow::Borrowed(value.as_str())),
            Self::Number(value) => Some(Cow::Owned(value.to_string())),
            Self::Boolean(value) => Some(Cow::Owned(value.to_string())),
            Self::Empty => None,
        }
    }

    /// Numeric view of the cell.
    ///
    /// Strings holding a decimal number are accepted so that text-formatted
    /// numeric columns read the same as numeric ones. Anything that does not
    /// parse, and any non-finite value, has no numeric view.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            Self::Number(value) => *value,
            Self::String(value) => value.trim().parse::<f64>().ok()?,
            Self::Boolean(_) | Self::Empty => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_text() {
            Some(text) => f.write_str(&text),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_view_tolerates_text() {
        assert_eq!(Cell::text("5.0").as_number(), Some(5.0));
        assert_eq!(Cell::text("  12 ").as_number(), Some(12.0));
        assert_eq!(Cell::Number(-3.5).as_number(), Some(-3.5));
        assert_eq!(Cell::text("abc").as_number(), None);
        assert_eq!(Cell::text("NaN").as_number(), None);
        assert_eq!(Cell::text("inf").as_number(), None);
        assert_eq!(Cell::Boolean(true).as_number(), None);
        assert_eq!(Cell::Empty.as_number(), None);
    }

    #[test]
    fn blank_covers_empty_and_whitespace() {
        assert!(Cell::Empty.is_blank());
        assert!(Cell::text("   ").is_blank());
        assert!(!Cell::text("P1").is_blank());
        assert!(!Cell::Number(0.0).is_blank());
        assert!(!Cell::Boolean(false).is_blank());
    }

    #[test]
    fn text_view_renders_scalars() {
        assert_eq!(Cell::Number(10.0).as_text().as_deref(), Some("10"));
        assert_eq!(Cell::Boolean(true).as_text().as_deref(), Some("true"));
        assert_eq!(Cell::Empty.as_text(), None);
        assert_eq!(Cell::text("USD").to_string(), "USD");
    }
}
