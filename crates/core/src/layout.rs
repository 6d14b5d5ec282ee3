use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// Logical layout of a Steam install on disk.
///
/// This is derived from the install root. It does *not* perform any IO itself;
/// callers read the files it points at.
#[derive(Debug, Clone)]
pub struct InstallLayout {
    /// Steam install root (e.g. `C:\Program Files (x86)\Steam`).
    pub root: PathBuf,
    /// Binary app cache (`appcache/appinfo.vdf`).
    pub appinfo_path: PathBuf,
    /// Library index (`steamapps/libraryfolders.vdf`).
    pub library_index_path: PathBuf,
    /// Directory holding client icons (`steam/games`).
    pub icons_dir: PathBuf,
}

impl InstallLayout {
    /// Compute the default layout for an install rooted at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let appinfo_path = root.join("appcache").join("appinfo.vdf");
        let library_index_path = root.join("steamapps").join("libraryfolders.vdf");
        let icons_dir = root.join("steam").join("games");

        Self { root, appinfo_path, library_index_path, icons_dir }
    }

    /// Use a different icon directory than `steam/games`.
    pub fn with_icons_dir(mut self, icons_dir: impl Into<PathBuf>) -> Self {
        self.icons_dir = icons_dir.into();
        self
    }

    /// Path of the `.ico` file for a client icon identifier.
    pub fn icon_path(&self, icon_id: &str) -> PathBuf {
        self.icons_dir.join(format!("{icon_id}.ico"))
    }
}

/// Layout of one library root registered in the library index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryLayout {
    pub root: PathBuf,
    /// `steamapps`, where manifests live.
    pub steamapps_dir: PathBuf,
    /// `steamapps/common`, where games are installed.
    pub common_dir: PathBuf,
}

impl LibraryLayout {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let steamapps_dir = root.join("steamapps");
        let common_dir = steamapps_dir.join("common");
        Self { root, steamapps_dir, common_dir }
    }

    /// Build a layout from a raw path string taken from the library index.
    pub fn from_index_entry(raw: &str) -> Self {
        Self::new(normalize_separators(raw))
    }

    /// Install directory of an application in this library.
    pub fn install_path(&self, install_dir: &str) -> PathBuf {
        self.common_dir.join(install_dir)
    }
}

/// Trim a path string and, where the platform separator is `\`, rewrite `/` to it.
///
/// Elsewhere the string is only trimmed: `\` is a legal file-name character on
/// Unix and must survive.
pub fn normalize_separators(raw: &str) -> String {
    let trimmed = raw.trim();
    if MAIN_SEPARATOR == '\\' {
        trimmed.replace('/', "\\")
    } else {
        trimmed.to_string()
    }
}
