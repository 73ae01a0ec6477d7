//! Core types for Pixelarte.
//!
//! This module provides the catalog and cart domain model.

pub mod cart;
pub mod id;
pub mod product;

pub use cart::{Cart, CartEntry};
pub use id::ProductId;
pub use product::{Product, ProductDraft, ProductDraftError};
