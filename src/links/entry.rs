//! ProtectedLink and LinkMetadata types stored in the link manifest.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codec::CiphertextBlob;
use crate::errors::Result;

/// One password-gated link as stored on disk.
///
/// The blob is kept as text and only parsed when someone tries to open
/// it, so a damaged entry never stops the rest of the manifest loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtectedLink {
    /// Base64 ciphertext blob.
    pub blob: String,

    /// When this link was sealed.
    pub created_at: DateTime<Utc>,

    /// Free-text note shown by `list` (never encrypted).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ProtectedLink {
    pub fn new(blob: &CiphertextBlob, note: Option<String>) -> Self {
        Self {
            blob: blob.to_base64(),
            created_at: Utc::now(),
            note,
        }
    }

    /// Parse the stored blob.
    pub fn ciphertext(&self) -> Result<CiphertextBlob> {
        CiphertextBlob::from_base64(&self.blob)
    }
}

/// Lightweight metadata about a link (no ciphertext).
///
/// Returned by `LinkStore::list` so callers can display link names
/// without touching any blob.
#[derive(Debug, Clone, Serialize)]
pub struct LinkMetadata {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub note: Option<String>,
}
