//! Cryptographic primitives for linkseal.
//!
//! This module provides:
//! - SHA-256 password-to-key derivation (`keys`)
//! - AES-256-GCM encryption and decryption (`encryption`)

pub mod encryption;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, derive_key, ...};
pub use encryption::{decrypt, encrypt, NONCE_LEN, TAG_LEN};
pub use keys::{derive_key, DerivedKey, KEY_LEN};
