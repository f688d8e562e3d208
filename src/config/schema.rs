//! Configuration schema for the HTTP Status Helper extension.
//!
//! All settings live under the "http-status" key of the editor settings.
//! Missing or unparseable settings fall back to defaults.

use serde::{Deserialize, Serialize};

/// Main configuration structure for the extension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusHelperConfig {
    /// Hover-related settings.
    #[serde(default)]
    pub hover: HoverConfig,
}

/// Settings controlling the status-code hover.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverConfig {
    /// Filetypes the hover is active for: language ids or file extensions,
    /// with or without a leading dot. `None` or an empty list means every
    /// document. Entries are normalized (trimmed, lowercased) by the
    /// filetype filter, not here.
    #[serde(default)]
    pub enabled_filetypes: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_filetype_list() {
        let config = StatusHelperConfig::default();
        assert_eq!(config.hover.enabled_filetypes, None);
    }

    #[test]
    fn deserializes_enabled_filetypes() {
        let json = r#"{"hover": {"enabledFiletypes": ["py", ".JS", " Go "]}}"#;
        let config: StatusHelperConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.hover.enabled_filetypes,
            Some(vec!["py".to_string(), ".JS".to_string(), " Go ".to_string()])
        );
    }

    #[test]
    fn missing_hover_section_defaults() {
        let config: StatusHelperConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.hover.enabled_filetypes, None);
    }

    #[test]
    fn non_list_value_fails_to_parse() {
        // The loader treats a parse failure as "use defaults", which in turn
        // means the wildcard filter.
        let json = r#"{"hover": {"enabledFiletypes": "py"}}"#;
        assert!(serde_json::from_str::<StatusHelperConfig>(json).is_err());
    }

    #[test]
    fn serializes_camel_case() {
        let config = StatusHelperConfig {
            hover: HoverConfig {
                enabled_filetypes: Some(vec!["rs".to_string()]),
            },
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("enabledFiletypes"));
    }
}
