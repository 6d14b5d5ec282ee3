use std::path::{Path, PathBuf};

use shortcut_core::shortcut::{render_url_shortcut, sanitize_file_name, ShortcutPlan};
use shortcut_core::{ApplicationRecord, CatalogEntry};

fn entry(name: &str, icon: Option<&str>) -> CatalogEntry {
    CatalogEntry {
        record: ApplicationRecord::new(620, name, "Portal 2"),
        library_root: PathBuf::from("/lib"),
        install_path: PathBuf::from("/lib/steamapps/common/Portal 2"),
        icon_path: icon.map(PathBuf::from),
    }
}

#[test]
fn sanitize_removes_invalid_characters() {
    assert_eq!(sanitize_file_name("Half-Life 2: Episode One"), "Half-Life 2 Episode One");
    assert_eq!(sanitize_file_name(" a<b>c\"d/e\\f|g?h*i\t"), "abcdefghi");
    assert_eq!(sanitize_file_name("ファイナル"), "ファイナル");
}

#[test]
fn render_includes_launch_url_and_icon() {
    let body = render_url_shortcut(620, Some(Path::new("/steam/games/abc.ico")));
    assert!(body.starts_with("[{000214A0-0000-0000-C000-000000000046}]\r\n"));
    assert!(body.contains("[InternetShortcut]\r\n"));
    assert!(body.contains("URL=steam://rungameid/620\r\n"));
    assert!(body.contains("IconFile=/steam/games/abc.ico\r\n"));
}

#[test]
fn render_leaves_icon_blank_when_absent() {
    let body = render_url_shortcut(1, None);
    assert!(body.ends_with("IconFile=\r\n"));
}

#[test]
fn plan_uses_sanitized_name() {
    let plan = ShortcutPlan::for_entry(&entry("Portal 2: Deluxe?", Some("/i/x.ico")));
    assert_eq!(plan.file_name, "Portal 2 Deluxe.url");
    assert!(plan.contents.contains("IconFile=/i/x.ico"));
}

#[test]
fn plan_falls_back_to_app_id_for_empty_names() {
    let plan = ShortcutPlan::for_entry(&entry("???", None));
    assert_eq!(plan.file_name, "app_620.url");
}
