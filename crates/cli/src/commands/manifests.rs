use anyhow::{Context, Result};
use serde::Serialize;
use shortcut_core::library::read_library_index;
use shortcut_core::{ApplicationRecord, LibraryLayout};

use crate::canonicalize_or_current;
use crate::commands::resolve_layout;

#[derive(Debug, Serialize)]
pub struct LibraryInfo {
    pub path: String,
    pub exists: bool,
}

/// Parse one app manifest and print the record.
pub fn manifest_command(path: &str, json: bool) -> Result<()> {
    let path = canonicalize_or_current(path)?;
    let record = ApplicationRecord::from_file(&path)
        .with_context(|| format!("Failed to parse manifest {}", path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!("App id: {}", record.app_id());
    println!("Name: {}", record.name());
    println!("Install dir: {}", record.install_dir());

    Ok(())
}

/// List library roots from `libraryfolders.vdf`.
pub fn libraries_command(install_root: Option<&str>, config: Option<&str>, json: bool) -> Result<()> {
    let layout = resolve_layout(install_root, config)?;
    let libraries: Vec<LibraryInfo> = read_library_index(&layout.library_index_path)
        .with_context(|| {
            format!("Failed to read library index {}", layout.library_index_path.display())
        })?
        .into_iter()
        .map(|raw| {
            let exists = LibraryLayout::from_index_entry(&raw).steamapps_dir.is_dir();
            LibraryInfo { path: raw, exists }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&libraries)?);
        return Ok(());
    }

    println!("Libraries ({}):", libraries.len());
    for lib in libraries {
        println!("- {} ({})", lib.path, if lib.exists { "OK" } else { "MISSING" });
    }

    Ok(())
}
