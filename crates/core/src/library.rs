//! Library index (`steamapps/libraryfolders.vdf`).
//!
//! Each registered library appears as a block with a `"path"` entry. Only those
//! lines are read; the rest of the block (label, content ids, app lists) is
//! ignored.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{MetadataError, MetadataResult};
use crate::keyvalue::read_text_lossy;

// `R` makes `$` match before `\r\n`, since the client writes CRLF on Windows.
static LIBRARY_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?mR)"path"\s+"(.+?)"$"#).expect("static library path pattern"));

/// Library root paths in source order. Duplicates are kept.
///
/// KeyValues escapes backslashes, so `C:\\Games` in the file is returned as
/// `C:\Games`.
pub fn library_paths(text: &str) -> MetadataResult<Vec<String>> {
    library_paths_in(text, "libraryfolders.vdf")
}

/// Read the library index at `path` and return its library roots.
pub fn read_library_index(path: impl AsRef<Path>) -> MetadataResult<Vec<String>> {
    let path = path.as_ref();
    let text = read_text_lossy(path)?;
    library_paths_in(&text, &path.display().to_string())
}

fn library_paths_in(text: &str, file: &str) -> MetadataResult<Vec<String>> {
    let paths: Vec<String> =
        LIBRARY_PATH.captures_iter(text).map(|caps| caps[1].replace(r"\\", r"\")).collect();
    if paths.is_empty() {
        return Err(MetadataError::MissingRequiredField { file: file.to_string(), field: "path" });
    }
    Ok(paths)
}
