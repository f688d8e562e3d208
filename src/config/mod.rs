//! Configuration management for the HTTP Status Helper extension.
//!
//! Settings are read from the editor under the "http-status" key, merged
//! with defaults, and held in a process-wide singleton. The LSP backend
//! reloads them on `workspace/didChangeConfiguration`.

pub mod schema;

pub use schema::{HoverConfig, StatusHelperConfig};

use once_cell::sync::Lazy;
use serde_json::Value;
use std::sync::RwLock;

/// Settings key the extension owns.
pub const CONFIG_SECTION: &str = "http-status";

/// Global configuration instance, lazily initialized to defaults.
static CONFIG: Lazy<RwLock<StatusHelperConfig>> =
    Lazy::new(|| RwLock::new(StatusHelperConfig::default()));

/// Loads configuration from a settings JSON value.
///
/// Reads the "http-status" section if present, falls back to defaults on
/// any parse failure, and updates the global configuration. Returns the
/// configuration now in effect.
///
/// # Example
///
/// ```no_run
/// use http_status_helper::config::load_config;
/// use serde_json::json;
///
/// let settings = json!({
///     "http-status": {
///         "hover": { "enabledFiletypes": ["py", "rs"] }
///     }
/// });
/// let config = load_config(Some(settings));
/// assert!(config.hover.enabled_filetypes.is_some());
/// ```
pub fn load_config(settings_json: Option<Value>) -> StatusHelperConfig {
    let mut config = StatusHelperConfig::default();

    if let Some(settings) = settings_json {
        // Settings may arrive either wrapped in the section key (editor
        // settings blob) or as the section body itself (initialization
        // options); accept both.
        let section = settings.get(CONFIG_SECTION).unwrap_or(&settings);

        match serde_json::from_value::<StatusHelperConfig>(section.clone()) {
            Ok(user_config) => config = user_config,
            Err(e) => {
                eprintln!(
                    "Warning: failed to parse http-status settings: {}. Using defaults.",
                    e
                );
            }
        }
    }

    if let Ok(mut global_config) = CONFIG.write() {
        *global_config = config.clone();
    }

    config
}

/// Gets the current global configuration.
///
/// Returns defaults if nothing has been loaded yet.
pub fn get_config() -> StatusHelperConfig {
    CONFIG.read().map(|c| c.clone()).unwrap_or_default()
}

/// Resets the configuration to defaults. Mainly for tests.
pub fn reset_config() {
    if let Ok(mut config) = CONFIG.write() {
        *config = StatusHelperConfig::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use serial_test::serial;

    #[test]
    #[serial]
    fn load_config_with_defaults() {
        let config = load_config(None);
        assert_eq!(config.hover.enabled_filetypes, None);
        reset_config();
    }

    #[test]
    #[serial]
    fn load_config_with_section_wrapper() {
        let settings = json!({
            "http-status": {
                "hover": { "enabledFiletypes": ["py", "rs"] }
            }
        });

        let config = load_config(Some(settings));
        assert_eq!(
            config.hover.enabled_filetypes,
            Some(vec!["py".to_string(), "rs".to_string()])
        );
        reset_config();
    }

    #[test]
    #[serial]
    fn load_config_with_bare_section_body() {
        let settings = json!({
            "hover": { "enabledFiletypes": ["go"] }
        });

        let config = load_config(Some(settings));
        assert_eq!(config.hover.enabled_filetypes, Some(vec!["go".to_string()]));
        reset_config();
    }

    #[test]
    #[serial]
    fn load_config_invalid_shape_falls_back() {
        let settings = json!({
            "http-status": {
                "hover": { "enabledFiletypes": 42 }
            }
        });

        let config = load_config(Some(settings));
        assert_eq!(config.hover.enabled_filetypes, None);
        reset_config();
    }

    #[test]
    #[serial]
    fn get_config_reflects_last_load() {
        reset_config();
        assert_eq!(get_config().hover.enabled_filetypes, None);

        load_config(Some(json!({
            "http-status": { "hover": { "enabledFiletypes": ["md"] } }
        })));
        assert_eq!(
            get_config().hover.enabled_filetypes,
            Some(vec!["md".to_string()])
        );

        reset_config();
        assert_eq!(get_config().hover.enabled_filetypes, None);
    }

    #[test]
    #[serial]
    fn unrelated_sections_are_ignored() {
        let settings = json!({
            "other-extension": { "someSetting": true }
        });

        let config = load_config(Some(settings));
        assert_eq!(config.hover.enabled_filetypes, None);
        reset_config();
    }
}
