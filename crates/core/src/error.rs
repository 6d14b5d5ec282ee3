//! Error taxonomy shared by every metadata reader.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading Steam metadata.
///
/// Every variant is local to one input file. Callers decide whether a failure
/// aborts the run or is reported and skipped.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The binary cache (`appinfo.vdf`) could not be opened or read at all.
    ///
    /// Icon lookups are unavailable, but shortcuts can still be produced
    /// without icons.
    #[error("Metadata source unavailable at {path}: {source}")]
    MetadataSourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A manifest file name does not embed a parseable app id.
    #[error("Malformed manifest name '{file_name}'; expected appmanifest_<digits>.acf")]
    MalformedManifestName { file_name: String },

    /// A manifest or library index lacks a key it must carry.
    #[error("Missing required field '{field}' in {file}")]
    MissingRequiredField { file: String, field: &'static str },

    /// A text input (manifest, library index, config) could not be read.
    #[error("Failed to read {path}: {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MetadataError {
    /// Stable snake_case name of the variant, for reports.
    pub fn kind(&self) -> &'static str {
        match self {
            MetadataError::MetadataSourceUnavailable { .. } => "metadata_source_unavailable",
            MetadataError::MalformedManifestName { .. } => "malformed_manifest_name",
            MetadataError::MissingRequiredField { .. } => "missing_required_field",
            MetadataError::SourceUnreadable { .. } => "source_unreadable",
        }
    }
}

/// Convenience result type for metadata operations.
pub type MetadataResult<T> = Result<T, MetadataError>;
