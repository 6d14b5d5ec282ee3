//! Optional settings file (JSON or YAML).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::InstallLayout;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config at {path} as JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse config at {path} as YAML: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Settings shared by every command. Command-line flags win over these values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutConfig {
    /// Steam install root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_root: Option<String>,
    /// Override for the client icon directory (defaults to `<root>/steam/games`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons_dir: Option<String>,
}

impl ShortcutConfig {
    /// Load a config file; `.yaml`/`.yml` are read as YAML, anything else as JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let body = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        if matches!(ext, "yaml" | "yml") {
            serde_yaml::from_str(&body)
                .map_err(|source| ConfigError::Yaml { path: path.to_path_buf(), source })
        } else {
            serde_json::from_str(&body)
                .map_err(|source| ConfigError::Json { path: path.to_path_buf(), source })
        }
    }

    /// Layout for the configured root, honoring the icon directory override.
    pub fn layout(&self, install_root: impl AsRef<Path>) -> InstallLayout {
        let layout = InstallLayout::new(install_root);
        match &self.icons_dir {
            Some(dir) => layout.with_icons_dir(dir),
            None => layout,
        }
    }
}
