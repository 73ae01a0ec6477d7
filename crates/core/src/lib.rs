//! Pixelarte Core - Shared domain types.
//!
//! This crate provides the domain model used by the storefront binary:
//! products, validated product drafts, and the session cart.
//!
//! # Architecture
//!
//! The core crate contains only types and their invariants - no I/O, no
//! persistence, no HTTP. The storefront crate owns those concerns.
//!
//! # Modules
//!
//! - [`types`] - Product and cart types with validated constructors

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
