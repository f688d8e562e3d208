//! Per-document filetype gating for the status-code hover.
//!
//! The user configures a list of language ids and/or file extensions the
//! hover should be active for. An absent, empty, or unparseable setting
//! means "every document".

use std::collections::HashSet;

use crate::config::StatusHelperConfig;

/// Token meaning "match every document".
pub const ALL_FILETYPES_WILDCARD: &str = "*";

/// Normalized set of filetypes the hover is enabled for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiletypeFilter {
    enabled: HashSet<String>,
}

impl FiletypeFilter {
    /// Builds a filter from the raw configured list.
    ///
    /// Entries are trimmed, lowercased, and dropped when empty. When the
    /// setting is absent or nothing survives normalization, the filter
    /// matches every document.
    pub fn from_setting(configured: Option<&[String]>) -> Self {
        let normalized: HashSet<String> = configured
            .unwrap_or(&[])
            .iter()
            .map(|value| value.trim().to_lowercase())
            .filter(|value| !value.is_empty())
            .collect();

        if normalized.is_empty() {
            Self::match_all()
        } else {
            Self { enabled: normalized }
        }
    }

    /// A filter enabled for every document.
    pub fn match_all() -> Self {
        let mut enabled = HashSet::new();
        enabled.insert(ALL_FILETYPES_WILDCARD.to_string());
        Self { enabled }
    }

    /// Builds the filter from the current extension configuration.
    pub fn from_config(config: &StatusHelperConfig) -> Self {
        Self::from_setting(config.hover.enabled_filetypes.as_deref())
    }

    /// Whether the hover is active for a document with the given language
    /// id and file name.
    ///
    /// Enabled when the set holds the wildcard, the lowercased language id,
    /// or the file extension either bare or with a leading dot.
    pub fn is_enabled(&self, language_id: &str, file_name: &str) -> bool {
        if self.enabled.contains(ALL_FILETYPES_WILDCARD) {
            return true;
        }

        if self.enabled.contains(&language_id.to_lowercase()) {
            return true;
        }

        let extension = file_extension(file_name);
        if extension.is_empty() {
            return false;
        }

        self.enabled.contains(&extension) || self.enabled.contains(&format!(".{}", extension))
    }
}

/// Lowercased substring after the final `.` of `file_name`.
///
/// Empty when the name has no dot or ends with one.
pub fn file_extension(file_name: &str) -> String {
    let normalized = file_name.to_lowercase();

    match normalized.rfind('.') {
        Some(idx) if idx + 1 < normalized.len() => normalized[idx + 1..].to_string(),
        _ => String::new(),
    }
}
