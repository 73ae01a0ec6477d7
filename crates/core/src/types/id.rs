//! Newtype ID for type-safe product references.

use serde::{Deserialize, Serialize};

/// Identifier of a catalog product.
///
/// Product IDs are positive integers assigned sequentially by the catalog
/// store (max existing id + 1). The newtype keeps them from being mixed up
/// with quantities or other integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Create a new ID from a u32 value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    #[must_use]
    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// The ID following this one in assignment order.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<ProductId> for u32 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_transparent() {
        let id = ProductId::new(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
        let back: ProductId = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_next() {
        assert_eq!(ProductId::new(0).next(), ProductId::new(1));
        assert_eq!(ProductId::new(41).next(), ProductId::new(42));
    }
}
