// Configuration structs

use anyhow::bail;
use serde::{Deserialize, Serialize};

use super::constants::{
    DEFAULT_API_URL, DEFAULT_LATITUDE_DELTA, DEFAULT_LONGITUDE_DELTA, DEFAULT_PROFILE_BASE_URL,
    DEFAULT_TIMEOUT_SECS,
};
use crate::directory::Coordinate;
use crate::location::Span;
use crate::session::ResponseOrdering;

/// Developer-directory connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the directory (e.g., "http://localhost:3333")
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Initial viewport settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    pub latitude_delta: f64,
    pub longitude_delta: f64,
    /// Fixed device position for hosts without a location subsystem.
    /// Both must be set to take effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            latitude_delta: DEFAULT_LATITUDE_DELTA,
            longitude_delta: DEFAULT_LONGITUDE_DELTA,
            latitude: None,
            longitude: None,
        }
    }
}

impl LocationConfig {
    pub fn span(&self) -> Span {
        Span::new(self.latitude_delta, self.longitude_delta)
    }

    pub fn fixed_position(&self) -> Option<Coordinate> {
        self.latitude
            .zip(self.longitude)
            .map(|(lat, lon)| Coordinate::new(lat, lon))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub response_ordering: ResponseOrdering,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub base_url: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PROFILE_BASE_URL.to_string(),
        }
    }
}

/// Feature flags configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesConfig {
    /// Enable debug logging for troubleshooting
    pub debug_logging: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub location: LocationConfig,
    pub session: SessionConfig,
    pub profile: ProfileConfig,
    pub features: FeaturesConfig,
}

impl Config {
    /// Validate configuration and return helpful errors
    pub fn validate(&self) -> anyhow::Result<()> {
        let base = self.api.base_url.trim();
        if base.is_empty() {
            bail!("api.base_url is empty");
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            bail!("api.base_url must be an http(s) URL, got '{}'", base);
        }
        if self.api.timeout_seconds == 0 {
            bail!("api.timeout_seconds must be greater than zero");
        }
        if !self.location.span().is_valid() {
            bail!(
                "location span must be positive, got {} x {}",
                self.location.latitude_delta,
                self.location.longitude_delta
            );
        }
        match (self.location.latitude, self.location.longitude) {
            (Some(_), None) | (None, Some(_)) => {
                bail!("location.latitude and location.longitude must be set together")
            }
            _ => {}
        }
        if let Some(position) = self.location.fixed_position() {
            if !position.is_valid() {
                bail!("location position out of range: {}", position);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.base_url, "http://localhost:3333");
        assert_eq!(config.session.response_ordering, ResponseOrdering::LatestIssued);
        assert!(config.location.fixed_position().is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            base_url = "https://devs.example"

            [location]
            latitude = -23.55
            longitude = -46.63
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://devs.example");
        assert_eq!(config.api.timeout_seconds, 30);
        assert_eq!(config.location.latitude_delta, 0.04);
        assert_eq!(
            config.location.fixed_position(),
            Some(Coordinate::new(-23.55, -46.63))
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_http_url() {
        let mut config = Config::default();
        config.api.base_url = "ftp://devs".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_span() {
        let mut config = Config::default();
        config.location.longitude_delta = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_half_a_position() {
        let mut config = Config::default();
        config.location.latitude = Some(1.0);
        assert!(config.validate().is_err());
    }
}
