use std::fs;
use std::path::{Path, PathBuf};

use crate::data::Document;
use crate::internal_error::InternalResult;

/// Durable storage for the one document, backed by a single JSON file.
///
/// Reads never fail: a missing, unreadable, or unparsable backing file
/// degrades to the empty document, and the store self-heals on the next
/// accepted write. Writes overwrite the whole file; there is no locking and
/// no temp-file rename, which is fine for the single-user setup this serves.
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    pub fn open(path: impl Into<PathBuf>) -> DocumentStore {
        DocumentStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the persisted document, or the empty document when there is
    /// nothing readable on disk.
    pub fn load(&self) -> Document {
        if !self.path.exists() {
            return Document::default();
        }

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!(
                    "could not read {}, serving empty document: {}",
                    self.path.display(),
                    e
                );
                return Document::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(document) => document,
            Err(e) => {
                log::warn!(
                    "{} does not hold a valid document, serving empty document: {}",
                    self.path.display(),
                    e
                );
                Document::default()
            }
        }
    }

    /// Overwrites the backing file with the given document, pretty-printed.
    pub fn replace(&self, document: &Document) -> InternalResult<()> {
        let json = serde_json::to_string_pretty(document)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
