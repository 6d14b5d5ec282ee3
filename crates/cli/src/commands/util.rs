use anyhow::{anyhow, Context, Result};
use shortcut_core::config::ShortcutConfig;
use shortcut_core::InstallLayout;
use tracing::debug;

use crate::canonicalize_or_current;

/// Load the config file if one was given, otherwise defaults.
pub fn load_config(config_path: Option<&str>) -> Result<ShortcutConfig> {
    match config_path {
        Some(path) => {
            let path = canonicalize_or_current(path)?;
            ShortcutConfig::load(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))
        }
        None => Ok(ShortcutConfig::default()),
    }
}

/// Resolve the install layout from `--install-root`, falling back to the config file.
pub fn resolve_layout(
    install_root: Option<&str>,
    config_path: Option<&str>,
) -> Result<InstallLayout> {
    let config = load_config(config_path)?;
    let root = install_root
        .map(str::to_string)
        .or_else(|| config.install_root.clone())
        .ok_or_else(|| {
            anyhow!("No Steam install root given; pass --install-root or set install_root in --config")
        })?;
    let root_path = canonicalize_or_current(&root)?;
    if !root_path.is_dir() {
        return Err(anyhow!("Steam install root does not exist: {}", root_path.display()));
    }
    let layout = config.layout(root_path);
    debug!(
        root = %layout.root.display(),
        icons = %layout.icons_dir.display(),
        "resolved install layout"
    );
    Ok(layout)
}
