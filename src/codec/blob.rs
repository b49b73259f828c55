//! The portable ciphertext blob.
//!
//! ```text
//! base64( [nonce: 12 bytes][ciphertext][auth tag: 16 bytes] )
//! ```
//!
//! Standard alphabet with `=` padding, the same as the browser's `btoa`,
//! so a blob made here can be opened by the page script and vice versa.
//! Surrounding whitespace is ignored when parsing; anything else that is
//! not canonical base64 is rejected.
//!
//! Parse errors are `DecryptionFailed` on purpose: a caller opening a
//! blob cannot tell a mangled blob from a wrong password.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::crypto::{NONCE_LEN, TAG_LEN};
use crate::errors::{LinkSealError, Result};

/// A sealed link: nonce plus AES-GCM output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CiphertextBlob {
    nonce: [u8; NONCE_LEN],
    sealed: Vec<u8>,
}

impl CiphertextBlob {
    /// Split raw `nonce || sealed` bytes.  Fails if there is not even a
    /// full nonce.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < NONCE_LEN {
            return Err(LinkSealError::DecryptionFailed);
        }
        let (nonce, sealed) = bytes.split_at(NONCE_LEN);
        let mut n = [0u8; NONCE_LEN];
        n.copy_from_slice(nonce);
        Ok(Self {
            nonce: n,
            sealed: sealed.to_vec(),
        })
    }

    /// Decode a base64 blob.
    pub fn from_base64(text: &str) -> Result<Self> {
        let raw = BASE64
            .decode(text.trim())
            .map_err(|_| LinkSealError::DecryptionFailed)?;
        Self::from_bytes(&raw)
    }

    /// The nonce this blob was sealed with.
    pub fn nonce(&self) -> &[u8; NONCE_LEN] {
        &self.nonce
    }

    /// Ciphertext followed by the auth tag.
    pub fn sealed(&self) -> &[u8] {
        &self.sealed
    }

    /// Length of the plaintext this blob would open to, if it is intact.
    pub fn plaintext_len(&self) -> Option<usize> {
        self.sealed.len().checked_sub(TAG_LEN)
    }

    /// `nonce || sealed`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(NONCE_LEN + self.sealed.len());
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.sealed);
        out
    }

    /// Encode as padded standard base64.
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.to_bytes())
    }
}

impl fmt::Display for CiphertextBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

impl FromStr for CiphertextBlob {
    type Err = LinkSealError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_base64(s)
    }
}
