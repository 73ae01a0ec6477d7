//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors, binary only)
//! 2. `TraceLayer` (request tracing, binary only)
//! 3. Session layer (tower-sessions with in-memory store)

pub mod session;

pub use session::create_session_layer;
