//! Minimal `"key"  "value"` extractor for Valve's text KeyValues files.
//!
//! This is not a KeyValues parser: nesting is ignored and every quoted pair in
//! the document lands in one flat map. That is enough for app manifests, whose
//! interesting keys (`name`, `installdir`) are unique at the top level.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use encoding_rs::UTF_8;
use regex::Regex;

use crate::error::{MetadataError, MetadataResult};

static KEY_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(\w+)"\s+"(.+?)""#).expect("static key/value pattern"));

/// Collect every quoted key/value pair in `text`. A repeated key keeps its last value.
pub fn extract_pairs(text: &str) -> HashMap<String, String> {
    KEY_VALUE
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Read a text KeyValues file as UTF-8, replacing invalid bytes with U+FFFD.
///
/// A leading BOM is stripped. Only an IO failure is an error.
pub fn read_text_lossy(path: &Path) -> MetadataResult<String> {
    let bytes = fs::read(path)
        .map_err(|source| MetadataError::SourceUnreadable { path: path.to_path_buf(), source })?;
    let (text, _had_errors) = UTF_8.decode_with_bom_removal(&bytes);
    Ok(text.into_owned())
}
