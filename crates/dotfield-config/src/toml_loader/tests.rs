//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_dotfield_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, dotfield_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[theme]
name = "light"

[grid]
spacing = 25.0

[background]
light = "#fafafa"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.theme.name, "light");
    assert_eq!(config.grid.spacing, 25.0);
    assert_eq!(config.background.light, "#fafafa");
    // Defaults preserved
    assert_eq!(config.grid.dot_size, 2.0);
    assert_eq!(config.background.dark, "rgb(0, 0, 0)");
    assert_eq!(config.animation.target_fps, 90);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, dotfield_common::ConfigError::ParseError(_)));
}

#[test]
fn out_of_range_channel_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[palette.dark_pointer]
start = [300, 0, 0]
end = [0, 0, 0]
"#,
    )
    .unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, dotfield_common::ConfigError::ParseError(_)));
}

#[test]
fn load_returns_invalid_values_unvalidated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[grid]
spacing = -4.0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.grid.spacing, -4.0);
    assert!(crate::validation::validate(&config).is_err());
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dotfield").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.theme.name, "dark");
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn create_default_config_keeps_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = config_path_in(dir.path());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "[grid]\nspacing = 40.0\n").unwrap();

    create_default_config(&path).unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.grid.spacing, 40.0);
}

#[test]
fn config_path_in_nests_under_app_dir() {
    let path = config_path_in(Path::new("/base"));
    assert_eq!(path, Path::new("/base/dotfield/config.toml"));
}

#[test]
fn default_config_toml_matches_defaults() {
    use super::template::default_config_toml;
    use crate::schema::{DotfieldConfig, PaletteConfig};

    let config: DotfieldConfig = toml::from_str(&default_config_toml()).unwrap();
    assert_eq!(config.theme.name, "dark");
    assert_eq!(config.palette, PaletteConfig::default());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("dotfield"));
        assert!(path_str.ends_with("config.toml"));
    }
}
