//! TOML configuration for winsnap.

mod errors;
mod loading;
mod types;

pub use errors::ConfigError;
pub use loading::{config_file_path, load_config, load_config_from};
pub use types::{DEFAULT_PRIMARY_WIDTH, RestoreConfig, WinsnapConfig, WmConfig};
