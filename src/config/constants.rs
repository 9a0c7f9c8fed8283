// Project-wide constants
//
// Centralised here so default endpoints and map spans have one source of
// truth. Import via `use crate::config::constants::*;`.

/// Default developer-directory endpoint (the directory's development port).
pub const DEFAULT_API_URL: &str = "http://localhost:3333";

/// Default HTTP request timeout for directory queries, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Latitude span of the initial viewport, in degrees.
pub const DEFAULT_LATITUDE_DELTA: f64 = 0.04;

/// Longitude span of the initial viewport, in degrees.
pub const DEFAULT_LONGITUDE_DELTA: f64 = 0.04;

/// Where developer profiles are published.
pub const DEFAULT_PROFILE_BASE_URL: &str = "https://github.com";

/// Environment variable that overrides `api.base_url`.
pub const API_URL_ENV: &str = "DEVSCOUT_API_URL";

/// Config directory under the user's home.
pub const CONFIG_DIR: &str = ".devscout";

pub const CONFIG_FILE: &str = "config.toml";
