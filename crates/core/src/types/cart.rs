//! Session-scoped shopping cart.
//!
//! The cart lives in the visitor's session, not in shared state. Entries are
//! denormalized product snapshots: later catalog edits do not propagate to
//! items already added.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::product::Product;

/// A product snapshot plus a quantity counter.
///
/// Invariant: `quantity >= 1`. A cart holds at most one entry per product id;
/// repeat adds increment the counter instead of appending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub product: Product,
    pub quantity: u32,
}

impl CartEntry {
    /// Line subtotal (price × quantity).
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// An ordered collection of cart entries for one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Add a product to the cart.
    ///
    /// If an entry with the same id exists, its quantity is incremented and
    /// its position preserved. Otherwise the product is snapshotted into a
    /// new quantity-1 entry appended at the end.
    pub fn add(&mut self, product: Product) {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.product.id == product.id)
        {
            entry.quantity += 1;
        } else {
            self.entries.push(CartEntry {
                product,
                quantity: 1,
            });
        }
    }

    /// Remove the entry with the given id. Removing an absent id is a no-op.
    pub fn remove(&mut self, id: ProductId) {
        self.entries.retain(|entry| entry.product.id != id);
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Sum of quantities across all entries.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.entries.iter().map(|entry| entry.quantity).sum()
    }

    /// Sum of price × quantity over all entries. Plain f64 arithmetic.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: u32, name: &str, price: f64) -> Product {
        let draft =
            crate::ProductDraft::new(name, format!("{name} print"), price, "/img/x.jpg").unwrap();
        Product::from_draft(ProductId::new(id), draft)
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::default();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert!(cart.total().abs() < f64::EPSILON);
    }

    #[test]
    fn test_repeat_adds_accumulate_one_entry() {
        let mut cart = Cart::default();
        for _ in 0..4 {
            cart.add(product(1, "A", 10.0));
        }
        assert_eq!(cart.entries().len(), 1);
        assert_eq!(cart.entries()[0].quantity, 4);
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn test_mixed_adds_preserve_order_and_totals() {
        // catalog = [{id:1, price:10}, {id:2, price:5}]; add(1); add(2); add(1)
        let mut cart = Cart::default();
        cart.add(product(1, "A", 10.0));
        cart.add(product(2, "B", 5.0));
        cart.add(product(1, "A", 10.0));

        let entries = cart.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].product.id, ProductId::new(1));
        assert_eq!(entries[0].quantity, 2);
        assert_eq!(entries[1].product.id, ProductId::new(2));
        assert_eq!(entries[1].quantity, 1);
        assert_eq!(cart.item_count(), 3);
        assert!((cart.total() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::default();
        cart.add(product(1, "A", 10.0));
        cart.add(product(2, "B", 5.0));

        cart.remove(ProductId::new(1));
        let after_first = cart.clone();
        cart.remove(ProductId::new(1));
        assert_eq!(cart, after_first);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut cart = Cart::default();
        cart.add(product(1, "A", 10.0));
        cart.remove(ProductId::new(99));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::default();
        cart.add(product(1, "A", 10.0));
        cart.add(product(2, "B", 5.0));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_snapshot_does_not_track_catalog_edits() {
        let mut cart = Cart::default();
        let mut p = product(1, "A", 10.0);
        cart.add(p.clone());

        // A later catalog edit must not change the cart entry
        p.price = 99.0;
        assert!((cart.entries()[0].product.price - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cart_survives_session_serialization() {
        let mut cart = Cart::default();
        cart.add(product(1, "Río Paraná", 12.5));
        cart.add(product(1, "Río Paraná", 12.5));

        let json = serde_json::to_string(&cart).unwrap();
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
    }
}
