//! Icon index built from Steam's binary app cache (`appcache/appinfo.vdf`).
//!
//! The cache maps every known app id to a block of metadata. The only field
//! this crate needs is `clienticon`, the identifier of the `.ico` file that
//! Steam keeps under `<install-root>/steam/games/`.

pub mod scanner;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{MetadataError, MetadataResult};

pub use scanner::{ScanState, ScanSummary, APP_HEADER_MARKER, ICON_MARKER, ICON_ID_LEN};

/// Immutable mapping from app id to client icon identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconIndex {
    icons: HashMap<i32, String>,
    summary: ScanSummary,
}

impl IconIndex {
    /// Scan an in-memory copy of the cache.
    ///
    /// Truncated input is not an error: the scan stops and keeps whatever it
    /// collected before the cut.
    pub fn scan(bytes: &[u8]) -> Self {
        let (icons, summary) = scanner::scan(bytes);
        debug!(
            sections = summary.sections,
            icons = summary.icons,
            truncated = summary.truncated,
            "scanned appinfo cache"
        );
        Self { icons, summary }
    }

    /// Read and scan the cache at `path`.
    pub fn open(path: impl AsRef<Path>) -> MetadataResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| MetadataError::MetadataSourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::scan(&bytes))
    }

    /// Icon identifier for `app_id`, or `None` when the cache has none.
    pub fn lookup(&self, app_id: i32) -> Option<&str> {
        self.icons.get(&app_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &str)> {
        self.icons.iter().map(|(id, icon)| (*id, icon.as_str()))
    }

    pub fn summary(&self) -> ScanSummary {
        self.summary
    }
}
