// HTTP client for the developer directory.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use super::types::{Developer, WireDeveloper};
use super::{DeveloperDirectory, QueryError, SearchQuery};
use crate::config::ApiConfig;

/// Directory reached over HTTP.
pub struct HttpDirectory {
    base_url: String,
    http: Client,
}

impl HttpDirectory {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        let base_url: String = base_url.into();
        Ok(Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn from_config(api: &ApiConfig) -> Result<Self> {
        Self::new(&api.base_url, Duration::from_secs(api.timeout_seconds))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_developers(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<Developer>, QueryError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| QueryError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            warn!("Directory {} returned {}", path, status);
            return Err(QueryError::Status { status, body });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| QueryError::Transport(e.to_string()))?;
        let developers = decode_developers(&body)?;
        debug!("Directory {} returned {} developers", path, developers.len());
        Ok(developers)
    }
}

#[async_trait]
impl DeveloperDirectory for HttpDirectory {
    async fn fetch_population(&self) -> Result<Vec<Developer>, QueryError> {
        self.get_developers("/devs", &[]).await
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<Developer>, QueryError> {
        let params = [
            ("latitude", query.latitude.to_string()),
            ("longitude", query.longitude.to_string()),
            ("techs", query.techs.clone()),
        ];
        self.get_developers("/search", &params).await
    }
}

/// Decode a directory response body.
///
/// The body must be a JSON array. Records that fail validation are logged
/// and left out; the remaining records keep their response order.
pub fn decode_developers(body: &str) -> Result<Vec<Developer>, QueryError> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| QueryError::Decode(e.to_string()))?;

    let mut developers = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        let wire: WireDeveloper = match serde_json::from_value(value) {
            Ok(w) => w,
            Err(e) => {
                warn!("Skipping developer record #{}: {}", index, e);
                continue;
            }
        };
        match Developer::try_from(wire) {
            Ok(dev) => developers.push(dev),
            Err(e) => warn!("Skipping developer record #{}: {}", index, e),
        }
    }
    Ok(developers)
}
