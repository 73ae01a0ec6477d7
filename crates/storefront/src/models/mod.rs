//! Domain models for storefront.
//!
//! The heavy lifting lives in `pixelarte-core`; this module only holds the
//! session-facing pieces.

pub mod session;

pub use session::keys as session_keys;
