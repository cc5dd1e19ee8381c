#![forbid(unsafe_code)]

//! Record store: loads the users file into memory and writes it back
//!
//! The store owns at most one loaded [`RegistryDocument`]. There is no locking
//! between processes; two invocations writing the same file race and the last
//! writer wins. Saves overwrite the destination in place, so an interrupted
//! write can leave a truncated file.

use crate::error::{Error, Result};
use crate::record::RegistryDocument;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default location of the users file, relative to the working directory
pub const DEFAULT_USERS_FILE: &str = "users.json";

/// Loads and saves the registry document at a fixed path
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    document: Option<RegistryDocument>,
}

impl RecordStore {
    /// Creates a store for the given path without touching the filesystem
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RecordStore {
            path: path.into(),
            document: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the whole users file
    ///
    /// On failure the previously loaded document, if any, is kept.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if the file does not exist
    /// - [`Error::Parse`] if it is not a JSON object with a `users` array
    /// - [`Error::Io`] for any other read failure
    pub fn load(&mut self) -> Result<&mut RegistryDocument> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                Error::NotFound {
                    path: self.path.clone(),
                }
            } else {
                Error::Io {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        let document = parse_document(&content).map_err(|source| Error::Parse {
            path: self.path.clone(),
            source,
        })?;

        log::debug!(
            "loaded {} user record(s) from {}",
            document.users.len(),
            self.path.display()
        );
        Ok(self.document.insert(document))
    }

    pub fn document(&self) -> Option<&RegistryDocument> {
        self.document.as_ref()
    }

    pub fn document_mut(&mut self) -> Option<&mut RegistryDocument> {
        self.document.as_mut()
    }

    /// Writes the loaded document to `destination`, or back to the load path
    ///
    /// Does nothing if no document has been loaded.
    pub fn save(&self, destination: Option<&Path>) -> Result<()> {
        let Some(document) = &self.document else {
            log::debug!("no document loaded, skipping save");
            return Ok(());
        };

        let out_path = destination.unwrap_or(self.path.as_path());
        let json = to_pretty_json(document).map_err(|source| Error::Serialize {
            path: out_path.to_path_buf(),
            source,
        })?;

        std::fs::write(out_path, json).map_err(|source| Error::Io {
            path: out_path.to_path_buf(),
            source,
        })?;

        log::debug!(
            "saved {} user record(s) to {}",
            document.users.len(),
            out_path.display()
        );
        Ok(())
    }
}

/// Parses registry JSON text
pub fn parse_document(content: &str) -> serde_json::Result<RegistryDocument> {
    serde_json::from_str(content)
}

/// Renders the document as two-space indented JSON with a trailing newline
///
/// Object keys come out sorted at every level, top level included.
pub fn to_pretty_json(document: &RegistryDocument) -> serde_json::Result<String> {
    let value = serde_json::to_value(document)?;
    let mut json = serde_json::to_string_pretty(&value)?;
    json.push('\n');
    Ok(json)
}
