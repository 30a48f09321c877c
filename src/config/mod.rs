//! Application configuration.

mod loader;
mod types;

pub use loader::{discover_config_path, load_config};
pub use types::AppConfig;
