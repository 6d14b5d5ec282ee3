use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use serde::Serialize;
use shortcut_core::shortcut::ShortcutPlan;
use shortcut_core::{Catalog, InstallLayout};

use crate::commands::resolve_layout;

#[derive(Serialize)]
pub struct CatalogReport {
    pub generated_at: String,
    pub install_root: String,
    #[serde(flatten)]
    pub catalog: Catalog,
}

fn build_catalog(layout: &InstallLayout) -> Result<Catalog> {
    Catalog::build(layout)
        .with_context(|| format!("Failed to build catalog for {}", layout.root.display()))
}

/// List installed apps with their library, install directory and icon.
pub fn catalog_command(install_root: Option<&str>, config: Option<&str>, json: bool) -> Result<()> {
    let layout = resolve_layout(install_root, config)?;
    let catalog = build_catalog(&layout)?;

    if json {
        let report = CatalogReport {
            generated_at: Utc::now().to_rfc3339(),
            install_root: layout.root.display().to_string(),
            catalog,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Installed apps ({}):", catalog.entries.len());
    if catalog.entries.is_empty() {
        println!("  (none)");
    }
    for entry in &catalog.entries {
        let icon = entry
            .icon_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(no icon)".to_string());
        println!("  - {} -> {} [icon: {}]", entry.record, entry.install_path.display(), icon);
    }

    if !catalog.failures.is_empty() {
        println!("Skipped files ({}):", catalog.failures.len());
        for failure in &catalog.failures {
            println!("  - {}: {}", failure.path.display(), failure.message);
        }
    }

    Ok(())
}

/// Print the `.url` shortcuts that would be written, without writing them.
pub fn preview_shortcuts_command(
    install_root: Option<&str>,
    config: Option<&str>,
    app_id: Option<i32>,
    json: bool,
) -> Result<()> {
    let layout = resolve_layout(install_root, config)?;
    let catalog = build_catalog(&layout)?;

    let plans: Vec<ShortcutPlan> = match app_id {
        Some(id) => {
            let entry =
                catalog.find(id).ok_or_else(|| anyhow!("App {} is not installed", id))?;
            vec![ShortcutPlan::for_entry(entry)]
        }
        None => catalog.entries.iter().map(ShortcutPlan::for_entry).collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&plans)?);
        return Ok(());
    }

    for plan in plans {
        println!("== {}", plan.file_name);
        print!("{}", plan.contents.replace("\r\n", "\n"));
    }

    Ok(())
}
