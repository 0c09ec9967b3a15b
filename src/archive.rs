// src/archive.rs
//! Project archive container
//!
//! Scratch-derived projects ship as zip containers holding a `project.json`
//! manifest next to the asset blobs (costumes, sounds). This module wraps the
//! `zip` crate behind a small codec that loads the container fully into
//! memory, supports replacing a single entry, and re-serializes with entry
//! order preserved.

use std::io::{Read, Seek, Write};
use thiserror::Error;
use tracing::debug;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Name of the manifest entry every project archive must carry.
pub const MANIFEST_NAME: &str = "project.json";

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("not a valid project archive: {0}")]
    Corrupt(#[from] zip::result::ZipError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single named entry in the container.
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    pub name: String,
    pub data: Vec<u8>,
    /// Directory entries are preserved so repacked output keeps its shape.
    pub is_dir: bool,
}

/// An in-memory project archive: an ordered collection of named byte blobs.
#[derive(Debug, Clone, Default)]
pub struct ProjectArchive {
    entries: Vec<ArchiveEntry>,
}

impl ProjectArchive {
    /// Parse a zip container, loading every entry into memory in archive
    /// order. Fails with [`ArchiveError::Corrupt`] when the bytes are not a
    /// valid container.
    pub fn open<R: Read + Seek>(reader: R) -> Result<Self, ArchiveError> {
        let mut zip = ZipArchive::new(reader)?;
        let mut entries = Vec::with_capacity(zip.len());

        for index in 0..zip.len() {
            let mut file = zip.by_index(index)?;
            let is_dir = file.is_dir();
            let mut data = Vec::new();
            if !is_dir {
                file.read_to_end(&mut data)?;
            }
            entries.push(ArchiveEntry {
                name: file.name().to_string(),
                data,
                is_dir,
            });
        }

        debug!("loaded archive with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Look up an entry's content by exact name.
    pub fn entry(&self, name: &str) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|e| !e.is_dir && e.name == name)
            .map(|e| e.data.as_slice())
    }

    /// Return a copy of the archive with the named entry replaced, or
    /// appended when no entry of that name exists. All other entries and
    /// their order are unchanged.
    pub fn with_entry(&self, name: &str, data: Vec<u8>) -> Self {
        let mut entries = self.entries.clone();
        match entries.iter_mut().find(|e| !e.is_dir && e.name == name) {
            Some(entry) => entry.data = data,
            None => entries.push(ArchiveEntry {
                name: name.to_string(),
                data,
                is_dir: false,
            }),
        }
        Self { entries }
    }

    /// Serialize the container, writing entries in stored order.
    pub fn serialize<W: Write + Seek>(&self, writer: W) -> Result<(), ArchiveError> {
        let mut zip = ZipWriter::new(writer);
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        for entry in &self.entries {
            if entry.is_dir {
                zip.add_directory(&entry.name, options)?;
            } else {
                zip.start_file(&entry.name, options)?;
                zip.write_all(&entry.data)?;
            }
        }

        zip.finish()?;
        Ok(())
    }

    /// Iterate over entry names in archive order.
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
