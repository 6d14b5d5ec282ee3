//! App manifests (`steamapps/appmanifest_<id>.acf`).

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{MetadataError, MetadataResult};
use crate::keyvalue::{extract_pairs, read_text_lossy};

static MANIFEST_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"appmanifest_(\d+)").expect("static manifest name pattern"));

/// One installed application as described by its manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    app_id: i32,
    name: String,
    install_dir: String,
}

impl ApplicationRecord {
    pub fn new(app_id: i32, name: impl Into<String>, install_dir: impl Into<String>) -> Self {
        Self { app_id, name: name.into(), install_dir: install_dir.into() }
    }

    /// Read and parse the manifest at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> MetadataResult<Self> {
        let path = path.as_ref();
        let file_name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        let contents = read_text_lossy(path)?;
        parse_manifest(&file_name, &contents)
    }

    pub fn app_id(&self) -> i32 {
        self.app_id
    }

    /// Display name, verbatim. Not safe to use as a file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory name under `<library>/steamapps/common`.
    pub fn install_dir(&self) -> &str {
        &self.install_dir
    }
}

impl std::fmt::Display for ApplicationRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.app_id, self.name)
    }
}

/// Extract the app id embedded in a manifest file name.
pub fn app_id_from_file_name(file_name: &str) -> MetadataResult<i32> {
    let malformed = || MetadataError::MalformedManifestName { file_name: file_name.to_string() };
    let caps = MANIFEST_NAME.captures(file_name).ok_or_else(malformed)?;
    caps[1].parse::<i32>().map_err(|_| malformed())
}

/// Build an [`ApplicationRecord`] from a manifest's file name and contents.
pub fn parse_manifest(file_name: &str, contents: &str) -> MetadataResult<ApplicationRecord> {
    let app_id = app_id_from_file_name(file_name)?;
    let mut pairs = extract_pairs(contents);

    let mut required = |field: &'static str| {
        pairs
            .remove(field)
            .ok_or_else(|| MetadataError::MissingRequiredField { file: file_name.to_string(), field })
    };
    let name = required("name")?;
    let install_dir = required("installdir")?;

    Ok(ApplicationRecord { app_id, name, install_dir })
}
