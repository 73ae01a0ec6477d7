//! Session-related types.
//!
//! The cart and the last confirmed purchase count are the only state kept
//! per visitor. Both live in the tower-sessions session, keyed by the
//! constants below; there is no ambient global cart.

/// Session keys for visitor state.
pub mod keys {
    /// Key for the session cart (`pixelarte_core::Cart`).
    pub const CART: &str = "cart";

    /// Key for the last confirmed purchase count (`u32`).
    pub const CONFIRMED_COUNT: &str = "confirmed_count";
}
