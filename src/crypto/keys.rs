//! Password-to-key derivation.
//!
//! The AES-256 key is the SHA-256 digest of the UTF-8 password bytes,
//! used as-is.  There is no salt and no stretching: the same password
//! always produces the same key, so a blob can be opened by anyone who
//! knows the password and nothing else.
//!
//! This is only strong enough for casual link gating.  Anyone holding a
//! blob can run an offline guessing attack against it at SHA-256 speed.

use sha2::{Digest, Sha256};
use zeroize::Zeroize;

/// Length of the derived key (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// A 32-byte symmetric key that zeroes its memory when dropped.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct DerivedKey {
    bytes: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Wrap raw key bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to build the cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKey(..)")
    }
}

/// Derive the symmetric key for `password`: `SHA-256(UTF-8(password))`.
pub fn derive_key(password: &str) -> DerivedKey {
    let mut digest = Sha256::digest(password.as_bytes());
    let mut key = DerivedKey::new([0u8; KEY_LEN]);
    key.bytes.copy_from_slice(&digest);
    digest.as_mut_slice().zeroize();
    key
}
