//! Durable storage for the product catalog.
//!
//! The catalog is a single JSON file holding an ordered array of products.
//! There is no database: every mutation is a full read-modify-write of the
//! file. Two concurrent writers can race and the later write wins; this is
//! an accepted limitation of the flat-file design, not something the store
//! tries to guard against.

pub mod catalog;

use thiserror::Error;

pub use catalog::CatalogStore;

/// Errors from the catalog file backing store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The file could not be read or written.
    #[error("catalog file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but does not parse as a product array.
    #[error("catalog file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}
