use crate::config::AppConfig;
use crate::{LibrisError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILE_NAME: &str = "libris.toml";

/// Load configuration.
///
/// With an explicit path, the file must exist and parse. Without one, the
/// working directory is searched first, then the platform config directory;
/// when neither holds a `libris.toml`, the defaults apply.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => load_config_file(path),
        None => match discover_config_path() {
            Some(path) => load_config_file(&path),
            None => {
                debug!("no config file found, using defaults");
                Ok(AppConfig::default())
            }
        },
    }
}

/// First existing config file location, if any: `./libris.toml`, then the
/// platform config directory.
pub fn discover_config_path() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    if let Some(dirs) = directories::ProjectDirs::from("", "", "libris") {
        let candidate = dirs.config_dir().join(CONFIG_FILE_NAME);
        if candidate.exists() {
            return Some(candidate);
        }
    }

    None
}

fn load_config_file(path: &Path) -> Result<AppConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        LibrisError::Config(format!("failed to read {}: {}", path.display(), e))
    })?;

    let config: AppConfig = toml::from_str(&contents).map_err(|e| {
        LibrisError::Config(format!("failed to parse {}: {}", path.display(), e))
    })?;

    debug!(path = %path.display(), "config loaded");
    Ok(config)
}
