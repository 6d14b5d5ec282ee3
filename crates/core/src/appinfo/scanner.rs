//! Marker scanner over the raw bytes of `appinfo.vdf`.
//!
//! The cache is not framed: an application section starts wherever the
//! application-header marker appears, and the icon sub-record (if any) is
//! located by searching for the icon marker before the next section starts.
//! The scanner therefore tries both markers at every byte offset.

use std::collections::HashMap;

use encoding_rs::WINDOWS_1252;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

/// `"appinfo\0\x02appid\0"`: opens a section, followed by a little-endian `i32` app id.
pub const APP_HEADER_MARKER: &[u8; 15] = b"appinfo\x00\x02appid\x00";

/// `"\x01clienticon\0"`: followed by the icon identifier bytes.
pub const ICON_MARKER: &[u8; 12] = b"\x01clienticon\x00";

/// Width of the app id that trails [`APP_HEADER_MARKER`].
pub const APP_ID_LEN: usize = 4;

/// Width of the icon identifier that trails [`ICON_MARKER`].
pub const ICON_ID_LEN: usize = 40;

/// Scanner state between two cursor positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// No open section, or the open section already produced its icon.
    SeekingApplication,
    /// Inside the section of `app_id`, which has no icon yet.
    SeekingIcon { app_id: i32 },
}

/// Counters describing one pass over the cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Number of application-header markers with a complete app id.
    pub sections: usize,
    /// Number of icon identifiers recorded.
    pub icons: usize,
    /// Sections closed (by a new header or end of input) without an icon.
    pub sections_without_icon: usize,
    /// True when input ended inside a header's app id or an icon identifier.
    pub truncated: bool,
}

/// Returns true if `marker` occurs in `bytes` starting exactly at `at`.
///
/// Fails closed when fewer than `marker.len()` bytes remain.
pub fn marker_at(bytes: &[u8], at: usize, marker: &[u8]) -> bool {
    bytes.get(at..).is_some_and(|rest| rest.starts_with(marker))
}

/// Reads the little-endian app id stored at `at`, if four bytes remain.
pub fn read_app_id(bytes: &[u8], at: usize) -> Option<i32> {
    let raw = bytes.get(at..at.checked_add(APP_ID_LEN)?)?;
    Some(i32::from_le_bytes(raw.try_into().ok()?))
}

/// Decodes the icon identifier stored at `at`, if forty bytes remain.
///
/// Bytes are decoded as Windows-1252 so any byte value maps to a character.
pub fn read_icon_id(bytes: &[u8], at: usize) -> Option<String> {
    let raw = bytes.get(at..at.checked_add(ICON_ID_LEN)?)?;
    let (decoded, _had_errors) = WINDOWS_1252.decode_without_bom_handling(raw);
    Some(decoded.into_owned())
}

/// Runs the two-state scan and returns the app id → icon mapping.
pub fn scan(bytes: &[u8]) -> (HashMap<i32, String>, ScanSummary) {
    let mut icons = HashMap::new();
    let mut summary = ScanSummary::default();
    let mut state = ScanState::SeekingApplication;
    let mut cursor = 0;

    while cursor < bytes.len() {
        if marker_at(bytes, cursor, APP_HEADER_MARKER) {
            let id_at = cursor + APP_HEADER_MARKER.len();
            let Some(app_id) = read_app_id(bytes, id_at) else {
                trace!(offset = cursor, "app id truncated; stopping scan");
                summary.truncated = true;
                break;
            };
            if let ScanState::SeekingIcon { app_id: previous } = state {
                trace!(app_id = previous, "no client icon in section");
                summary.sections_without_icon += 1;
            }
            trace!(app_id, offset = cursor, "found appinfo header");
            summary.sections += 1;
            state = ScanState::SeekingIcon { app_id };
            cursor = id_at + APP_ID_LEN;
            continue;
        }

        if let ScanState::SeekingIcon { app_id } = state {
            if marker_at(bytes, cursor, ICON_MARKER) {
                let icon_at = cursor + ICON_MARKER.len();
                let Some(icon) = read_icon_id(bytes, icon_at) else {
                    trace!(app_id, offset = cursor, "client icon truncated; stopping scan");
                    summary.truncated = true;
                    break;
                };
                trace!(app_id, icon = %icon, "found client icon");
                if let Some(replaced) = icons.insert(app_id, icon) {
                    warn!(app_id, replaced = %replaced, "app id seen twice; keeping later icon");
                } else {
                    summary.icons += 1;
                }
                state = ScanState::SeekingApplication;
                cursor = icon_at + ICON_ID_LEN;
                continue;
            }
        }

        cursor += 1;
    }

    if let ScanState::SeekingIcon { app_id } = state {
        trace!(app_id, "no client icon before end of input");
        summary.sections_without_icon += 1;
    }

    (icons, summary)
}
