//! AES-256-GCM authenticated encryption.
//!
//! Each call to `encrypt` draws a fresh random 12-byte nonce from the OS
//! and prepends it to the ciphertext.  `decrypt` splits the nonce back out
//! before decrypting.  No associated data is used.
//!
//! Layout of the returned byte buffer:
//!   [ 12-byte nonce | ciphertext + 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::TryRngCore;

use super::keys::DerivedKey;
use crate::errors::{LinkSealError, Result};

/// Size of the AES-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of the AES-GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// Encrypt `plaintext` under `key`.
///
/// Returns the nonce prepended to the ciphertext (nonce || ciphertext).
pub fn encrypt(key: &DerivedKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    let nonce = generate_nonce()?;
    encrypt_with_nonce(key, &nonce, plaintext)
}

/// Draw a fresh nonce from the operating system's CSPRNG.
///
/// Fails with `EnvironmentUnavailable` if the OS cannot supply randomness.
pub fn generate_nonce() -> Result<[u8; NONCE_LEN]> {
    let mut nonce = [0u8; NONCE_LEN];
    rand::rngs::OsRng.try_fill_bytes(&mut nonce).map_err(|e| {
        LinkSealError::EnvironmentUnavailable(format!("secure random source: {e}"))
    })?;
    Ok(nonce)
}

/// Encrypt with a caller-chosen nonce.  Only `encrypt` and known-answer
/// tests should call this; a nonce must never be reused under one key.
pub(crate) fn encrypt_with_nonce(
    key: &DerivedKey,
    nonce: &[u8; NONCE_LEN],
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| LinkSealError::EnvironmentUnavailable(format!("AES-256-GCM key: {e}")))?;

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|e| LinkSealError::EnvironmentUnavailable(format!("AES-256-GCM seal: {e}")))?;

    let mut output = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    output.extend_from_slice(nonce);
    output.extend_from_slice(&ciphertext);
    Ok(output)
}

/// Decrypt data that was produced by `encrypt`.
///
/// Every failure is reported as `DecryptionFailed`, whatever the cause.
pub fn decrypt(key: &DerivedKey, ciphertext_with_nonce: &[u8]) -> Result<Vec<u8>> {
    if ciphertext_with_nonce.len() < NONCE_LEN {
        return Err(LinkSealError::DecryptionFailed);
    }

    let (nonce_bytes, ciphertext) = ciphertext_with_nonce.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    let cipher =
        Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| LinkSealError::DecryptionFailed)?;

    // Decrypt and verify the auth tag.
    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| LinkSealError::DecryptionFailed)
}
