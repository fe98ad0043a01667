use crate::config::Config;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AqicnError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("provider returned HTTP {status}: {body}")]
    BadStatus {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Geographic bounding box for station queries. Omitted corners default to
/// the whole world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub lat1: f64,
    pub lng1: f64,
    pub lat2: f64,
    pub lng2: f64,
}

impl Default for MapBounds {
    fn default() -> Self {
        Self {
            lat1: -90.0,
            lng1: -180.0,
            lat2: 90.0,
            lng2: 180.0,
        }
    }
}

impl MapBounds {
    /// Four-corner form expected by the provider's `latlng` parameter.
    pub fn latlng(&self) -> String {
        format!("{},{},{},{}", self.lat1, self.lng1, self.lat2, self.lng2)
    }

    pub fn cache_key(&self) -> String {
        format!("map:{}:{}:{}:{}", self.lat1, self.lng1, self.lat2, self.lng2)
    }
}

/// Client for the AQICN (api.waqi.info) provider.
///
/// One attempt per call, no retry: callers surface any failure as a generic
/// proxy error instead of compounding load on the provider.
pub struct AqicnClient {
    client: Client,
    config: Config,
}

impl AqicnClient {
    pub fn new(config: Config) -> Self {
        let client = Client::builder()
            .user_agent("AirWatch/1.0")
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// `GET /feed/{city}/` — AQI feed for a city token (`@<uid>`, a bare
    /// name, or `geo:<lat>;<lng>`).
    pub async fn feed(&self, city: &str) -> Result<Value, AqicnError> {
        let url = format!(
            "{}/feed/{}/",
            self.config.aqicn_base_url,
            urlencoding::encode(city)
        );
        self.get_json(&url, &[]).await
    }

    /// `GET /search/` — stations matching a free-text keyword.
    pub async fn search(&self, keyword: &str) -> Result<Value, AqicnError> {
        let url = format!("{}/search/", self.config.aqicn_base_url);
        self.get_json(&url, &[("keyword", keyword)]).await
    }

    /// `GET /map/bounds/` — stations inside a bounding box.
    pub async fn map_bounds(&self, bounds: &MapBounds) -> Result<Value, AqicnError> {
        let url = format!("{}/map/bounds/", self.config.aqicn_base_url);
        self.get_json(&url, &[("latlng", bounds.latlng().as_str())])
            .await
    }

    async fn get_json(&self, url: &str, params: &[(&str, &str)]) -> Result<Value, AqicnError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .query(&[("token", self.config.aqicn_token.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            // Held as opaque JSON: the proxy contract is byte-for-byte
            // passthrough, including provider envelopes with status "error".
            let json: Value = response.json().await?;
            Ok(json)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(AqicnError::BadStatus { status, body })
        }
    }
}
