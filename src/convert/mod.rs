// src/convert/mod.rs
//! Dialect conversion
//!
//! The whole operation is sequential: read the manifest entry out of the
//! archive, parse it, rewrite it for the destination dialect, serialize it
//! back into a copy of the archive. Either every step succeeds and one output
//! archive exists, or the operation aborts having produced none.

mod converter;
mod report;
mod tables;

pub use converter::{ConvertOptions, DialectConverter, Direction};
pub use report::{ConvertReport, RemovedBlock};
pub use tables::ConvertTables;

use crate::archive::{ProjectArchive, MANIFEST_NAME};
use crate::project::Dialect;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("project.json not found")]
    ManifestMissing,

    #[error("malformed project.json: {0}")]
    MalformedManifest(String),

    #[error("project.json is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convert an opened project archive, returning a new archive with its
/// manifest rewritten plus the conversion report. All other entries are
/// carried over untouched, in order.
pub fn convert_archive(
    archive: &ProjectArchive,
    options: ConvertOptions,
) -> Result<(ProjectArchive, ConvertReport), ConvertError> {
    let bytes = archive
        .entry(MANIFEST_NAME)
        .ok_or(ConvertError::ManifestMissing)?;
    let manifest: Value = serde_json::from_slice(bytes)?;

    if let Some(dialect) = Dialect::detect(&manifest) {
        info!("detected source dialect: {}", dialect);
        if dialect == options.direction.destination() {
            warn!(
                "project already looks like a {} project; converting anyway",
                dialect
            );
        }
    }

    info!("editing {}", MANIFEST_NAME);
    let converter = DialectConverter::new(options);
    let (converted, report) = converter.convert(&manifest)?;

    let serialized = serde_json::to_vec_pretty(&converted)?;
    Ok((archive.with_entry(MANIFEST_NAME, serialized), report))
}
