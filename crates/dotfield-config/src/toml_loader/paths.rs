//! Where dotfield keeps its config file, and first-run creation of it.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use dotfield_common::ConfigError;
use tracing::{debug, info};

use super::template::default_config_toml;

const APP_DIR: &str = "dotfield";
const FILE_NAME: &str = "config.toml";

/// `<config_dir>/dotfield/config.toml`, e.g. `~/.config/dotfield/config.toml`
/// on Linux.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))?;
    Ok(config_path_in(&base))
}

/// The dotfield config file under `base`.
pub fn config_path_in(base: &Path) -> PathBuf {
    base.join(APP_DIR).join(FILE_NAME)
}

/// Write the commented template to `path`, creating parent directories.
///
/// An existing file is left untouched, so a file created between the
/// caller's existence check and this write is never clobbered.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!("cannot create {}: {e}", parent.display()))
        })?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!("config already present at {}", path.display());
            return Ok(());
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "cannot create {}: {e}",
                path.display()
            )))
        }
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(|e| ConfigError::ParseError(format!("cannot write {}: {e}", path.display())))?;

    info!("wrote default dotfield config to {}", path.display());
    Ok(())
}
