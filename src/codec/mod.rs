//! Password-gated link codec.
//!
//! `seal` turns a plaintext (normally a URL) into a base64 blob that can
//! be stored in the open; `open` turns it back given the same password.
//!
//! ```text
//! key  = SHA-256(UTF-8(password))
//! blob = base64(nonce || AES-256-GCM(key, nonce, UTF-8(plaintext)))
//! ```
//!
//! Every call is independent: there is no shared state, so the codec can
//! be used from any number of threads at once.

pub mod blob;

pub use blob::CiphertextBlob;

use crate::crypto::{decrypt, derive_key, encrypt};
use crate::errors::{LinkSealError, Result};

/// Seals and opens links under a shared password.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymmetricLinkCodec;

impl SymmetricLinkCodec {
    pub fn new() -> Self {
        Self
    }

    /// Encrypt `plaintext` under `password` with a fresh random nonce.
    ///
    /// Two seals of the same input produce different blobs.
    pub fn seal(&self, plaintext: &str, password: &str) -> Result<CiphertextBlob> {
        let key = derive_key(password);
        let bytes = encrypt(&key, plaintext.as_bytes())?;
        let blob = CiphertextBlob::from_bytes(&bytes)?;
        log::debug!(
            "sealed {} plaintext bytes into {} blob bytes",
            blob.plaintext_len().unwrap_or_default(),
            bytes.len()
        );
        Ok(blob)
    }

    /// Decrypt `blob` with `password`.
    ///
    /// Fails with `DecryptionFailed` for a wrong password, a tampered or
    /// truncated blob, or a payload that is not UTF-8, without saying which.
    pub fn open(&self, blob: &CiphertextBlob, password: &str) -> Result<String> {
        let key = derive_key(password);
        let plaintext = decrypt(&key, &blob.to_bytes())?;
        String::from_utf8(plaintext).map_err(|_| LinkSealError::DecryptionFailed)
    }
}

/// Seal `plaintext` and return the base64 blob.
pub fn seal(plaintext: &str, password: &str) -> Result<String> {
    SymmetricLinkCodec.seal(plaintext, password).map(|b| b.to_base64())
}

/// Open a base64 blob.  Malformed base64 fails the same way as a wrong
/// password.
pub fn open(blob: &str, password: &str) -> Result<String> {
    let blob = CiphertextBlob::from_base64(blob)?;
    SymmetricLinkCodec.open(&blob, password)
}
