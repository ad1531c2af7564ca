//! dotfield configuration system.
//!
//! Provides TOML-based configuration with live reload and full
//! validation. All config sections use sensible defaults so partial
//! configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use dotfield_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let field = config.field().expect("invalid field config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod reload;
pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

pub use reload::ReloadManager;
pub use schema::{DotfieldConfig, FieldConfig, CONFIG_SCHEMA_VERSION};
pub use watcher::ConfigWatcher;

use dotfield_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path, creating it if missing,
/// and validate the result.
pub fn load_config() -> Result<DotfieldConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<DotfieldConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &DotfieldConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = DotfieldConfig::default();
        let json = config_to_json(&config);
        for section in [
            "\"theme\"",
            "\"grid\"",
            "\"force\"",
            "\"glow\"",
            "\"palette\"",
            "\"background\"",
            "\"edge\"",
            "\"animation\"",
            "\"hand\"",
            "\"logging\"",
        ] {
            assert!(json.contains(section), "missing {section}");
        }
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = DotfieldConfig::default();
        let json = config_to_json(&config);
        let parsed: DotfieldConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.theme.name, "dark");
        assert_eq!(parsed.palette, config.palette);
        assert_eq!(parsed.animation.target_fps, 90);
    }

    #[test]
    fn load_config_from_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[grid]\nspacing = 0.0\n").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
