//! Links module: named, password-gated links kept in a manifest file.
//!
//! This module provides:
//! - `ProtectedLink` and `LinkMetadata` types (`entry`)
//! - The TOML-backed `LinkStore` (`store`)

pub mod entry;
pub mod store;

// Re-export the most commonly used items.
pub use entry::{LinkMetadata, ProtectedLink};
pub use store::{validate_link_name, LinkStore};
