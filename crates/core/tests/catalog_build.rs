use std::fs;
use std::path::Path;

use shortcut_core::appinfo::{APP_HEADER_MARKER, ICON_MARKER};
use shortcut_core::catalog::manifest_paths;
use shortcut_core::{Catalog, InstallLayout, MetadataError};
use tempfile::tempdir;

const ICON_10: &str = "aaaaaaaaaabbbbbbbbbbccccccccccdddddddddd";
const ICON_20: &str = "1111111111222222222233333333334444444444";

fn write_manifest(steamapps: &Path, file_name: &str, name: Option<&str>, install_dir: &str) {
    let mut body = String::from("\"AppState\"\n{\n");
    if let Some(name) = name {
        body.push_str(&format!("\t\"name\"\t\t\"{name}\"\n"));
    }
    body.push_str(&format!("\t\"installdir\"\t\t\"{install_dir}\"\n}}\n"));
    fs::write(steamapps.join(file_name), body).expect("write manifest");
}

fn write_library_index(layout: &InstallLayout, libraries: &[&Path]) {
    let mut body = String::from("\"libraryfolders\"\n{\n");
    for (i, lib) in libraries.iter().enumerate() {
        let escaped = lib.display().to_string().replace('\\', "\\\\");
        body.push_str(&format!("\t\"{i}\"\n\t{{\n\t\t\"path\"\t\t\"{escaped}\"\n\t}}\n"));
    }
    body.push_str("}\n");
    fs::create_dir_all(layout.library_index_path.parent().unwrap()).unwrap();
    fs::write(&layout.library_index_path, body).expect("write libraryfolders");
}

fn write_appinfo(layout: &InstallLayout, icons: &[(i32, &str)]) {
    let mut bytes = b"\x29\x44\x56\x07\x01\x00\x00\x00".to_vec();
    for (app_id, icon) in icons {
        bytes.extend_from_slice(APP_HEADER_MARKER);
        bytes.extend_from_slice(&app_id.to_le_bytes());
        bytes.extend_from_slice(b"\x00\x01type\x00game\x00");
        bytes.extend_from_slice(ICON_MARKER);
        bytes.extend_from_slice(icon.as_bytes());
        bytes.extend_from_slice(b"\x00\x08");
    }
    fs::create_dir_all(layout.appinfo_path.parent().unwrap()).unwrap();
    fs::write(&layout.appinfo_path, bytes).expect("write appinfo");
}

/// Two libraries: the install root and a second drive.
fn fixture(root: &Path, second: &Path) -> InstallLayout {
    let layout = InstallLayout::new(root);
    write_library_index(&layout, &[root, second, root]);

    let steamapps = root.join("steamapps");
    fs::create_dir_all(steamapps.join("common").join("GameA")).unwrap();
    write_manifest(&steamapps, "appmanifest_10.acf", Some("Game A"), "GameA");
    write_manifest(&steamapps, "appmanifest_20.acf", Some("Not Installed"), "Gone");
    write_manifest(&steamapps, "appmanifest_30.acf", None, "Nameless");
    write_manifest(&steamapps, "appmanifest_bad.acf", Some("Bad"), "Bad");
    fs::write(steamapps.join("notes.txt"), "ignored").unwrap();

    let second_apps = second.join("steamapps");
    fs::create_dir_all(second_apps.join("common").join("GameD")).unwrap();
    write_manifest(&second_apps, "appmanifest_40.acf", Some("Game: D?"), "GameD");

    layout
}

#[test]
fn build_joins_manifests_with_icons() {
    let root = tempdir().unwrap();
    let second = tempdir().unwrap();
    let layout = fixture(root.path(), second.path());
    write_appinfo(&layout, &[(10, ICON_10), (20, ICON_20)]);

    let catalog = Catalog::build(&layout).expect("build catalog");

    assert_eq!(catalog.libraries.len(), 2, "repeated library root is skipped");
    let ids: Vec<i32> = catalog.entries.iter().map(|e| e.record.app_id()).collect();
    assert_eq!(ids, vec![10, 40]);

    let game_a = catalog.find(10).expect("game a");
    assert_eq!(game_a.record.name(), "Game A");
    assert_eq!(game_a.install_path, root.path().join("steamapps").join("common").join("GameA"));
    assert_eq!(game_a.icon_path, Some(layout.icons_dir.join(format!("{ICON_10}.ico"))));

    let game_d = catalog.find(40).expect("game d");
    assert_eq!(game_d.icon_path, None);
    assert!(catalog.find(20).is_none(), "apps without an install directory are skipped");

    let kinds: Vec<&str> = catalog.failures.iter().map(|f| f.kind).collect();
    assert_eq!(kinds, vec!["missing_required_field", "malformed_manifest_name"]);
    assert!(catalog.failures[1].path.ends_with("appmanifest_bad.acf"));

    let scan = catalog.icon_scan.expect("icon scan summary");
    assert_eq!(scan.sections, 2);
    assert_eq!(scan.icons, 2);
}

#[test]
fn missing_icon_cache_still_builds_entries() {
    let root = tempdir().unwrap();
    let second = tempdir().unwrap();
    let layout = fixture(root.path(), second.path());

    let catalog = Catalog::build(&layout).expect("build catalog");
    assert_eq!(catalog.entries.len(), 2);
    assert!(catalog.entries.iter().all(|e| e.icon_path.is_none()));
    assert!(catalog.icon_scan.is_none());
    assert_eq!(catalog.failures[0].kind, "metadata_source_unavailable");
    assert_eq!(catalog.failures[0].path, layout.appinfo_path);
}

#[test]
fn unreadable_library_is_reported_and_skipped() {
    let root = tempdir().unwrap();
    let layout = InstallLayout::new(root.path());
    let ghost = root.path().join("ghost-library");
    write_library_index(&layout, &[&ghost]);

    let catalog = Catalog::build(&layout).expect("build catalog");
    assert!(catalog.entries.is_empty());
    assert!(catalog
        .failures
        .iter()
        .any(|f| f.kind == "source_unreadable" && f.path == ghost.join("steamapps")));
}

#[test]
fn missing_library_index_is_fatal() {
    let root = tempdir().unwrap();
    let err = Catalog::build(&InstallLayout::new(root.path())).unwrap_err();
    assert!(matches!(err, MetadataError::SourceUnreadable { .. }), "unexpected error: {err}");
}

#[test]
fn manifest_paths_lists_only_acf_files_sorted() {
    let dir = tempdir().unwrap();
    for name in ["appmanifest_2.acf", "appmanifest_1.acf", "libraryfolders.vdf"] {
        fs::write(dir.path().join(name), "").unwrap();
    }
    fs::create_dir(dir.path().join("dir.acf")).unwrap();

    let paths = manifest_paths(dir.path()).unwrap();
    let names: Vec<_> =
        paths.iter().map(|p| p.file_name().unwrap().to_string_lossy().to_string()).collect();
    assert_eq!(names, vec!["appmanifest_1.acf", "appmanifest_2.acf"]);
}
