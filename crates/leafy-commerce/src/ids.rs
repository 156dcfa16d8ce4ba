//! Newtype identifiers.
//!
//! Product ids are plain strings in the catalog ("aloe", "peace-lily"), but
//! keeping them behind a newtype stops a display name or category label from
//! being passed where an id is expected.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Unique identifier of a catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&ProductId> for ProductId {
    fn from(id: &ProductId) -> Self {
        id.clone()
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets maps keyed by `ProductId` be queried with a plain `&str`.
impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("aloe");
        assert_eq!(id.as_str(), "aloe");
    }

    #[test]
    fn test_id_from_string() {
        let id: ProductId = "peace-lily".into();
        assert_eq!(id.as_str(), "peace-lily");
        assert_eq!(id.into_inner(), "peace-lily");
    }

    #[test]
    fn test_id_display() {
        let id = ProductId::new("monstera");
        assert_eq!(format!("{}", id), "monstera");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(ProductId::new("fern"), ProductId::from("fern"));
        assert_ne!(ProductId::new("fern"), ProductId::new("pothos"));
    }

    #[test]
    fn test_id_borrow_lookup() {
        let mut map = HashMap::new();
        map.insert(ProductId::new("snake"), 2);
        assert_eq!(map.get("snake"), Some(&2));
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&ProductId::new("aloe")).unwrap();
        assert_eq!(json, "\"aloe\"");
    }
}
