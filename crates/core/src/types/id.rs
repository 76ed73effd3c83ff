//! Line item identifiers.
//!
//! Commerce providers hand out either opaque strings (`item_7RyWOwmK5nEa2V`)
//! or plain integers, so the identifier accepts both on the wire and renders
//! the same text either way.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a line item, unique within one receipt.
///
/// Used as the stable display key for the line item row.
///
/// ```
/// use seities_core::LineItemId;
///
/// let numeric: LineItemId = serde_json::from_str("7").unwrap();
/// let text: LineItemId = serde_json::from_str("\"item_7\"").unwrap();
///
/// assert_eq!(numeric.to_string(), "7");
/// assert_eq!(text.to_string(), "item_7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineItemId {
    /// Integer identifier.
    Number(i64),
    /// Opaque string identifier.
    Text(String),
}

impl LineItemId {
    /// Returns the identifier as a display key.
    #[must_use]
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LineItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for LineItemId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for LineItemId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_number() {
        let id: LineItemId = serde_json::from_str("42").unwrap();
        assert_eq!(id, LineItemId::Number(42));
    }

    #[test]
    fn test_deserialize_text() {
        let id: LineItemId = serde_json::from_str("\"item_abc\"").unwrap();
        assert_eq!(id, LineItemId::Text("item_abc".to_string()));
    }

    #[test]
    fn test_rejects_other_shapes() {
        assert!(serde_json::from_str::<LineItemId>("true").is_err());
        assert!(serde_json::from_str::<LineItemId>("{}").is_err());
    }

    #[test]
    fn test_number_and_text_are_distinct() {
        // "1" and 1 render the same but are different identifiers
        assert_ne!(LineItemId::from(1), LineItemId::from("1"));
        assert_eq!(LineItemId::from(1).key(), LineItemId::from("1").key());
    }
}
