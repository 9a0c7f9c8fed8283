// Configuration module
// Public interface for configuration loading

pub mod constants;
mod loader;
mod settings;

pub use loader::{default_config_path, load_config_from, resolve_config_path};
pub use settings::{ApiConfig, Config, FeaturesConfig, LocationConfig, ProfileConfig, SessionConfig};
