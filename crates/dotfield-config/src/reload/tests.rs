//! Tests for the reload manager.

use super::manager::load_validated;
use super::*;
use std::path::PathBuf;

#[tokio::test]
async fn start_with_nonexistent_path_uses_defaults() {
    let path = PathBuf::from("/tmp/nonexistent_dotfield_reload_test.toml");
    let (config, rx) = ReloadManager::start(path);
    assert_eq!(config.theme.name, "dark");
    assert_eq!(rx.borrow().grid.spacing, 26.0);
}

#[tokio::test]
async fn start_with_valid_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[grid]
spacing = 30.0
"#,
    )
    .unwrap();

    let (config, _rx) = ReloadManager::start(path);
    assert_eq!(config.grid.spacing, 30.0);
    assert_eq!(config.grid.dot_size, 2.0);
}

#[tokio::test]
async fn start_with_invalid_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[animation]
transition_ms = 0.0
"#,
    )
    .unwrap();

    let (config, _rx) = ReloadManager::start(path);
    assert_eq!(config.animation.transition_ms, 600.0);
}

#[test]
fn load_validated_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[glow]
opacity = 3.0
"#,
    )
    .unwrap();

    let err = load_validated(&path).unwrap_err().to_string();
    assert!(err.contains("glow.opacity"));
}
