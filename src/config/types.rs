use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings read from `libris.toml`. Every field has a default, so an
/// absent config file is equivalent to an empty one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory uploaded files are written under.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,

    /// Tracing filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            log_filter: default_log_filter(),
        }
    }
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_log_filter() -> String {
    "libris=info".to_string()
}
