//! The link manifest: named blobs kept in a TOML file.
//!
//! ```toml
//! [links.portfolio]
//! blob = "9/uL9EOaRlXN..."
//! created_at = "2026-10-17T12:00:00Z"
//! note = "client preview"
//! ```
//!
//! The manifest only ever holds ciphertext, so it can be committed or
//! published next to the page that embeds the blobs.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::entry::{LinkMetadata, ProtectedLink};
use crate::codec::{CiphertextBlob, SymmetricLinkCodec};
use crate::errors::{LinkSealError, Result};

/// Longest accepted link name.
const MAX_NAME_LEN: usize = 64;

/// On-disk shape of the manifest.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Manifest {
    #[serde(default)]
    links: BTreeMap<String, ProtectedLink>,
}

/// A loaded link manifest.  Changes stay in memory until `save`.
pub struct LinkStore {
    path: PathBuf,
    manifest: Manifest,
}

impl LinkStore {
    /// Load the manifest at `path`, or start an empty one if the file
    /// does not exist yet.
    pub fn load(path: &Path) -> Result<Self> {
        let manifest = if path.exists() {
            let contents = fs::read_to_string(path)?;
            toml::from_str(&contents).map_err(|e| LinkSealError::ManifestError {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?
        } else {
            log::debug!("no manifest at {}, starting empty", path.display());
            Manifest::default()
        };

        Ok(Self {
            path: path.to_path_buf(),
            manifest,
        })
    }

    /// Write the manifest back to disk, creating parent directories.
    ///
    /// Writes `.<name>.tmp` next to the manifest and renames it over the
    /// old file, so a failed write never leaves a truncated manifest.
    pub fn save(&self) -> Result<()> {
        let contents = toml::to_string_pretty(&self.manifest)
            .map_err(|e| LinkSealError::SerializationError(format!("link manifest: {e}")))?;

        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = temp_path(&self.path);
        if let Err(e) = fs::write(&tmp_path, contents) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        fs::rename(&tmp_path, &self.path)?;
        log::info!(
            "saved {} link(s) to {}",
            self.manifest.links.len(),
            self.path.display()
        );
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.manifest.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.manifest.links.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.manifest.links.contains_key(name)
    }

    /// Store an already sealed blob under `name`.
    pub fn insert(
        &mut self,
        name: &str,
        blob: &CiphertextBlob,
        note: Option<String>,
        overwrite: bool,
    ) -> Result<()> {
        validate_link_name(name)?;
        if !overwrite && self.contains(name) {
            return Err(LinkSealError::LinkAlreadyExists(name.to_string()));
        }
        self.manifest
            .links
            .insert(name.to_string(), ProtectedLink::new(blob, note));
        Ok(())
    }

    /// Seal `plaintext` under `password` and store it as `name`.
    pub fn seal(
        &mut self,
        name: &str,
        plaintext: &str,
        password: &str,
        note: Option<String>,
        overwrite: bool,
    ) -> Result<()> {
        // Check the name before doing any crypto.
        validate_link_name(name)?;
        if !overwrite && self.contains(name) {
            return Err(LinkSealError::LinkAlreadyExists(name.to_string()));
        }
        let blob = SymmetricLinkCodec.seal(plaintext, password)?;
        self.insert(name, &blob, note, overwrite)
    }

    pub fn get(&self, name: &str) -> Result<&ProtectedLink> {
        self.manifest
            .links
            .get(name)
            .ok_or_else(|| LinkSealError::LinkNotFound(name.to_string()))
    }

    /// Open the link stored as `name`.
    pub fn unlock(&self, name: &str, password: &str) -> Result<String> {
        let blob = self.get(name)?.ciphertext()?;
        SymmetricLinkCodec.open(&blob, password)
    }

    pub fn remove(&mut self, name: &str) -> Result<ProtectedLink> {
        self.manifest
            .links
            .remove(name)
            .ok_or_else(|| LinkSealError::LinkNotFound(name.to_string()))
    }

    /// Names, timestamps and notes, sorted by name.
    pub fn list(&self) -> Vec<LinkMetadata> {
        self.manifest
            .links
            .iter()
            .map(|(name, link)| LinkMetadata {
                name: name.clone(),
                created_at: link.created_at,
                note: link.note.clone(),
            })
            .collect()
    }
}

/// Sibling temp file used by `save`: `dir/links.toml` -> `dir/.links.toml.tmp`.
fn temp_path(path: &Path) -> PathBuf {
    let parent = path.parent().unwrap_or(Path::new("."));
    parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ))
}

/// Check that a link name is safe to use as a TOML key and easy to type.
///
/// Allowed: lowercase letters, digits, `-` and `_`. Must not be empty,
/// start or end with a separator, or exceed 64 characters.
pub fn validate_link_name(name: &str) -> Result<()> {
    let valid_chars = name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
    let is_sep = |c: char| c == '-' || c == '_';

    if name.is_empty()
        || name.len() > MAX_NAME_LEN
        || !valid_chars
        || name.starts_with(is_sep)
        || name.ends_with(is_sep)
    {
        return Err(LinkSealError::InvalidLinkName(name.to_string()));
    }
    Ok(())
}
