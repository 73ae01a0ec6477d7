//! Catalog product and its validated draft form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::id::ProductId;

/// A product in the catalog.
///
/// Identity is the `id` field; all other fields are mutable via admin edits.
/// Prices are plain floating-point numbers, matching the persisted JSON
/// representation. No currency normalization is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Image URL or path, rendered as-is by templates.
    pub image: String,
}

impl Product {
    /// Materialize a draft with an assigned ID.
    #[must_use]
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            image: draft.image,
        }
    }

    /// Overwrite all mutable fields from a draft. The ID never changes.
    pub fn apply_draft(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.price = draft.price;
        self.image = draft.image;
    }
}

/// Validation failures when constructing a [`ProductDraft`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductDraftError {
    /// A required text field was empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The price was negative, NaN, or infinite.
    #[error("price must be a non-negative number")]
    InvalidPrice,
}

/// Product fields as submitted by the admin forms, validated at construction.
///
/// A draft carries everything except the ID, which the catalog store assigns
/// on create and keeps immutable on update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    name: String,
    description: String,
    price: f64,
    image: String,
}

impl ProductDraft {
    /// Validate the field set for a new or updated product.
    ///
    /// # Errors
    ///
    /// Returns [`ProductDraftError::MissingField`] if any text field is empty
    /// after trimming, and [`ProductDraftError::InvalidPrice`] if the price
    /// is negative or not a finite number.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Result<Self, ProductDraftError> {
        let name = name.into();
        let description = description.into();
        let image = image.into();

        if name.trim().is_empty() {
            return Err(ProductDraftError::MissingField("name"));
        }
        if description.trim().is_empty() {
            return Err(ProductDraftError::MissingField("description"));
        }
        if image.trim().is_empty() {
            return Err(ProductDraftError::MissingField("image"));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(ProductDraftError::InvalidPrice);
        }

        Ok(Self {
            name,
            description,
            price,
            image,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft::new("Andes at night", "Night-time satellite capture", 25.0, "/img/andes.jpg")
            .unwrap()
    }

    #[test]
    fn test_draft_valid() {
        let d = draft();
        assert_eq!(d.name(), "Andes at night");
        assert!((d.price() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_draft_rejects_empty_fields() {
        assert_eq!(
            ProductDraft::new("", "desc", 1.0, "img").unwrap_err(),
            ProductDraftError::MissingField("name")
        );
        assert_eq!(
            ProductDraft::new("name", "  ", 1.0, "img").unwrap_err(),
            ProductDraftError::MissingField("description")
        );
        assert_eq!(
            ProductDraft::new("name", "desc", 1.0, "").unwrap_err(),
            ProductDraftError::MissingField("image")
        );
    }

    #[test]
    fn test_draft_rejects_bad_price() {
        assert_eq!(
            ProductDraft::new("n", "d", -0.01, "i").unwrap_err(),
            ProductDraftError::InvalidPrice
        );
        assert_eq!(
            ProductDraft::new("n", "d", f64::NAN, "i").unwrap_err(),
            ProductDraftError::InvalidPrice
        );
        // Zero is a valid (free) price
        assert!(ProductDraft::new("n", "d", 0.0, "i").is_ok());
    }

    #[test]
    fn test_apply_draft_keeps_id() {
        let mut product = Product::from_draft(ProductId::new(3), draft());
        let update = ProductDraft::new("Sahara dunes", "Daylight capture", 30.5, "/img/sahara.jpg")
            .unwrap();
        product.apply_draft(update);
        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.name, "Sahara dunes");
        assert!((product.price - 30.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_product_json_field_names() {
        let product = Product::from_draft(ProductId::new(1), draft());
        let json = serde_json::to_value(&product).unwrap();
        for field in ["id", "name", "description", "price", "image"] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
    }
}
