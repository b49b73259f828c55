//! Password-gated links.
//!
//! A URL is sealed into a base64 blob with AES-256-GCM under a key that is
//! the SHA-256 of a password.  The blob can be published anywhere; anyone
//! with the password can open it again.  This is link obfuscation, not a
//! vault: the key derivation is unsalted and fast on purpose, so that the
//! blobs stay compatible with a few lines of browser WebCrypto.
//!
//! ```
//! let blob = linkseal::codec::seal("https://example.com/secret", "pw123")?;
//! assert_eq!(linkseal::codec::open(&blob, "pw123")?, "https://example.com/secret");
//! assert!(linkseal::codec::open(&blob, "wrongpw").is_err());
//! # Ok::<(), linkseal::errors::LinkSealError>(())
//! ```

pub mod cli;
pub mod codec;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod links;

pub use codec::{CiphertextBlob, SymmetricLinkCodec};
pub use errors::{LinkSealError, Result};
