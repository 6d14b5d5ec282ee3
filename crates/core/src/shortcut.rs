//! Internet-shortcut (`.url`) rendering for catalog entries.
//!
//! Only the file name and body are produced here; writing them is up to the
//! caller.

use std::path::Path;

use serde::Serialize;

use crate::catalog::CatalogEntry;

/// Characters rejected in file names on Windows, the strictest target.
const INVALID_FILE_NAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Strip characters that cannot appear in a file name.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_control() && !INVALID_FILE_NAME_CHARS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Body of a shortcut that launches `app_id` through the Steam URL handler.
pub fn render_url_shortcut(app_id: i32, icon_path: Option<&Path>) -> String {
    let icon = icon_path.map(|p| p.display().to_string()).unwrap_or_default();
    format!(
        "[{{000214A0-0000-0000-C000-000000000046}}]\r\n\
         Prop3=19,0\r\n\
         [InternetShortcut]\r\n\
         IDList=\r\n\
         IconIndex=0\r\n\
         URL=steam://rungameid/{app_id}\r\n\
         IconFile={icon}\r\n"
    )
}

/// A shortcut ready to be written: file name plus contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortcutPlan {
    pub file_name: String,
    pub contents: String,
}

impl ShortcutPlan {
    pub fn for_entry(entry: &CatalogEntry) -> Self {
        let mut stem = sanitize_file_name(entry.record.name());
        if stem.is_empty() {
            stem = format!("app_{}", entry.record.app_id());
        }
        Self {
            file_name: format!("{stem}.url"),
            contents: render_url_shortcut(entry.record.app_id(), entry.icon_path.as_deref()),
        }
    }
}
