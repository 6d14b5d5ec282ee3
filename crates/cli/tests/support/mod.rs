//! Builds a small fake Steam install for CLI tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use shortcut_core::appinfo::{APP_HEADER_MARKER, ICON_MARKER};

pub const PORTAL_ICON: &str = "0a1b2c3d4e5f60718293a4b5c6d7e8f901234567";

/// Install root with one library (itself), two installed apps and an icon for app 620.
pub fn fake_install(root: &Path) {
    let steamapps = root.join("steamapps");
    fs::create_dir_all(steamapps.join("common").join("Portal 2")).unwrap();
    fs::create_dir_all(steamapps.join("common").join("Terraria")).unwrap();

    let escaped = root.display().to_string().replace('\\', "\\\\");
    fs::write(
        steamapps.join("libraryfolders.vdf"),
        format!("\"libraryfolders\"\n{{\n\t\"0\"\n\t{{\n\t\t\"path\"\t\t\"{escaped}\"\n\t}}\n}}\n"),
    )
    .unwrap();

    fs::write(
        steamapps.join("appmanifest_620.acf"),
        "\"AppState\"\n{\n\t\"appid\"\t\t\"620\"\n\t\"name\"\t\t\"Portal 2\"\n\t\"installdir\"\t\t\"Portal 2\"\n}\n",
    )
    .unwrap();
    fs::write(
        steamapps.join("appmanifest_105600.acf"),
        "\"AppState\"\n{\n\t\"name\"\t\t\"Terraria\"\n\t\"installdir\"\t\t\"Terraria\"\n}\n",
    )
    .unwrap();

    let mut cache = Vec::new();
    cache.extend_from_slice(APP_HEADER_MARKER);
    cache.extend_from_slice(&620i32.to_le_bytes());
    cache.extend_from_slice(ICON_MARKER);
    cache.extend_from_slice(PORTAL_ICON.as_bytes());
    cache.extend_from_slice(APP_HEADER_MARKER);
    cache.extend_from_slice(&105600i32.to_le_bytes());
    fs::create_dir_all(root.join("appcache")).unwrap();
    fs::write(root.join("appcache").join("appinfo.vdf"), cache).unwrap();
}
