//! Joins library roots, app manifests and the icon index into one catalog.
//!
//! Failures are collected per file: an unreadable manifest or library only
//! removes that entry, and a missing `appinfo.vdf` only removes icons. The
//! library index itself is the one hard requirement.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::appinfo::{IconIndex, ScanSummary};
use crate::error::{MetadataError, MetadataResult};
use crate::layout::{InstallLayout, LibraryLayout};
use crate::library::read_library_index;
use crate::manifest::ApplicationRecord;

/// An installed application with everything needed to build its shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub record: ApplicationRecord,
    pub library_root: PathBuf,
    pub install_path: PathBuf,
    /// `None` when the cache has no icon for the app or could not be read.
    pub icon_path: Option<PathBuf>,
}

/// A file that could not be used, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogFailure {
    pub path: PathBuf,
    pub kind: &'static str,
    pub message: String,
}

impl CatalogFailure {
    fn new(path: impl Into<PathBuf>, error: &MetadataError) -> Self {
        Self { path: path.into(), kind: error.kind(), message: error.to_string() }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    /// Library roots in index order, without repeats.
    pub libraries: Vec<PathBuf>,
    pub entries: Vec<CatalogEntry>,
    pub failures: Vec<CatalogFailure>,
    /// Scan counters, absent when the icon cache was unavailable.
    pub icon_scan: Option<ScanSummary>,
}

impl Catalog {
    /// Read everything reachable from `layout`.
    pub fn build(layout: &InstallLayout) -> MetadataResult<Self> {
        let library_roots = read_library_index(&layout.library_index_path)?;
        let mut catalog = Catalog::default();

        let icons = match IconIndex::open(&layout.appinfo_path) {
            Ok(index) => {
                catalog.icon_scan = Some(index.summary());
                Some(index)
            }
            Err(err) => {
                warn!(error = %err, "icon cache unavailable; shortcuts will have no icons");
                catalog.failures.push(CatalogFailure::new(&layout.appinfo_path, &err));
                None
            }
        };

        let mut seen = HashSet::new();
        for raw in &library_roots {
            let library = LibraryLayout::from_index_entry(raw);
            if !seen.insert(library.root.clone()) {
                debug!(library = %library.root.display(), "library listed twice; skipping repeat");
                continue;
            }
            info!(library = %library.root.display(), "processing library");
            catalog.add_library(layout, &library, icons.as_ref());
            catalog.libraries.push(library.root);
        }

        Ok(catalog)
    }

    fn add_library(
        &mut self,
        layout: &InstallLayout,
        library: &LibraryLayout,
        icons: Option<&IconIndex>,
    ) {
        let manifests = match manifest_paths(&library.steamapps_dir) {
            Ok(paths) => paths,
            Err(err) => {
                warn!(error = %err, "cannot list manifests");
                self.failures.push(CatalogFailure::new(&library.steamapps_dir, &err));
                return;
            }
        };

        for path in manifests {
            let record = match ApplicationRecord::from_file(&path) {
                Ok(record) => record,
                Err(err) => {
                    warn!(error = %err, "skipping manifest");
                    self.failures.push(CatalogFailure::new(&path, &err));
                    continue;
                }
            };

            let install_path = library.install_path(record.install_dir());
            if !install_path.is_dir() {
                debug!(app = %record, path = %install_path.display(), "not installed; skipping");
                continue;
            }

            let icon_path =
                icons.and_then(|index| index.lookup(record.app_id())).map(|id| layout.icon_path(id));
            self.entries.push(CatalogEntry {
                record,
                library_root: library.root.clone(),
                install_path,
                icon_path,
            });
        }
    }

    /// First entry for `app_id`, if it is installed.
    pub fn find(&self, app_id: i32) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.record.app_id() == app_id)
    }
}

/// `*.acf` files directly under `steamapps_dir`, sorted by path.
pub fn manifest_paths(steamapps_dir: &Path) -> MetadataResult<Vec<PathBuf>> {
    let unreadable =
        |source| MetadataError::SourceUnreadable { path: steamapps_dir.to_path_buf(), source };
    let mut paths = Vec::new();
    for entry in fs::read_dir(steamapps_dir).map_err(unreadable)? {
        let path = entry.map_err(unreadable)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "acf") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
