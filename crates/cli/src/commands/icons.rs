use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use shortcut_core::appinfo::ScanSummary;
use shortcut_core::{IconIndex, InstallLayout};

use crate::commands::resolve_layout;
use crate::sha256_bytes;

#[derive(Debug, Serialize)]
pub struct IconInfo {
    pub app_id: i32,
    pub icon_id: Option<String>,
    pub icon_path: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct IconScanReport {
    pub cache: PathBuf,
    pub summary: ScanSummary,
    pub icons: Vec<IconInfo>,
}

#[derive(Debug, Serialize)]
pub struct CacheInfo {
    pub path: PathBuf,
    pub size: u64,
    pub sha256: String,
    pub summary: ScanSummary,
}

fn open_icon_index(layout: &InstallLayout) -> Result<IconIndex> {
    IconIndex::open(&layout.appinfo_path).with_context(|| {
        format!("Failed to read icon cache at {}", layout.appinfo_path.display())
    })
}

/// Every app id that has a client icon, sorted by app id.
pub fn collect_icons(layout: &InstallLayout, index: &IconIndex) -> Vec<IconInfo> {
    let mut icons: Vec<IconInfo> = index
        .iter()
        .map(|(app_id, icon)| IconInfo {
            app_id,
            icon_id: Some(icon.to_string()),
            icon_path: Some(layout.icon_path(icon)),
        })
        .collect();
    icons.sort_by_key(|info| info.app_id);
    icons
}

/// Scan `appinfo.vdf` and list every icon found.
pub fn scan_icons_command(install_root: Option<&str>, config: Option<&str>, json: bool) -> Result<()> {
    let layout = resolve_layout(install_root, config)?;
    let index = open_icon_index(&layout)?;
    let report = IconScanReport {
        cache: layout.appinfo_path.clone(),
        summary: index.summary(),
        icons: collect_icons(&layout, &index),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Icon cache: {}", report.cache.display());
    println!(
        "Sections: {}  Icons: {}  Without icon: {}{}",
        report.summary.sections,
        report.summary.icons,
        report.summary.sections_without_icon,
        if report.summary.truncated { "  (truncated)" } else { "" }
    );
    if report.icons.is_empty() {
        println!("(none)");
        return Ok(());
    }
    for info in &report.icons {
        println!("- {}: {}", info.app_id, info.icon_id.as_deref().unwrap_or_default());
    }

    Ok(())
}

/// Look up the icon of a single app.
pub fn icon_command(
    install_root: Option<&str>,
    config: Option<&str>,
    app_id: i32,
    json: bool,
) -> Result<()> {
    let layout = resolve_layout(install_root, config)?;
    let index = open_icon_index(&layout)?;
    let icon_id = index.lookup(app_id).map(str::to_string);
    let info = IconInfo {
        app_id,
        icon_path: icon_id.as_deref().map(|id| layout.icon_path(id)),
        icon_id,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    match (&info.icon_id, &info.icon_path) {
        (Some(id), Some(path)) => {
            println!("App {}: {}", app_id, id);
            println!("  Path: {}", path.display());
        }
        _ => println!("App {}: (no icon)", app_id),
    }

    Ok(())
}

/// Size, hash and scan counters of the icon cache.
pub fn cache_info_command(install_root: Option<&str>, config: Option<&str>, json: bool) -> Result<()> {
    let layout = resolve_layout(install_root, config)?;
    let bytes = fs::read(&layout.appinfo_path).with_context(|| {
        format!("Failed to read icon cache at {}", layout.appinfo_path.display())
    })?;
    let info = CacheInfo {
        path: layout.appinfo_path.clone(),
        size: bytes.len() as u64,
        sha256: sha256_bytes(&bytes),
        summary: IconIndex::scan(&bytes).summary(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Icon cache");
    println!("==========");
    println!("Path: {}", info.path.display());
    println!("Size: {} bytes", info.size);
    println!("SHA-256: {}", info.sha256);
    println!("Sections: {}", info.summary.sections);
    println!("Icons: {}", info.summary.icons);
    println!("Sections without icon: {}", info.summary.sections_without_icon);
    println!("Truncated: {}", if info.summary.truncated { "yes" } else { "no" });

    Ok(())
}
