use crate::domain::ports::TemperatureResolver;
use crate::domain::Location;
use crate::utils::error::{Result, WeatherError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

const SERVICE: &str = "WeatherAPI";
const COUNTRY: &str = "Brazil";

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    current: Current,
}

#[derive(Debug, Deserialize)]
struct Current {
    temp_c: f64,
}

#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    endpoint: Url,
    api_key: String,
    client: Client,
}

impl WeatherApiClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let raw = format!("{}/current.json", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&raw).map_err(|e| WeatherError::InvalidConfigValueError {
            field: "weather_api.base_url".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(super::USER_AGENT)
            .build()
            .map_err(|source| WeatherError::Upstream {
                service: SERVICE,
                source,
            })?;

        Ok(Self {
            endpoint,
            api_key: api_key.to_string(),
            client,
        })
    }

    fn current_url(&self, location: &Location) -> Url {
        let query = format!("{}, {}, {}", location.city, location.region, COUNTRY);
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("key", &self.api_key)
            .append_pair("q", &query)
            .append_pair("aqi", "no");
        url
    }
}

#[async_trait]
impl TemperatureResolver for WeatherApiClient {
    async fn resolve(&self, location: &Location) -> Result<f64> {
        if location.city.is_empty() {
            return Err(WeatherError::InvalidLocation);
        }

        // The URL carries the API key, so only the location is logged.
        tracing::debug!(
            "Querying {} for {}, {}",
            SERVICE,
            location.city,
            location.region
        );
        let response = self
            .client
            .get(self.current_url(location))
            .send()
            .await
            .map_err(|source| WeatherError::Upstream {
                service: SERVICE,
                source,
            })?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::UNAUTHORIZED => {
                tracing::warn!("{} rejected the configured API key", SERVICE);
                return Err(WeatherError::InvalidApiKey);
            }
            StatusCode::BAD_REQUEST => return Err(WeatherError::WeatherNotFound),
            status => {
                tracing::warn!("{} returned status {}", SERVICE, status);
                return Err(WeatherError::UnexpectedStatus {
                    service: SERVICE,
                    status: status.as_u16(),
                });
            }
        }

        let body = response.text().await.map_err(|source| WeatherError::Upstream {
            service: SERVICE,
            source,
        })?;
        let parsed: CurrentResponse =
            serde_json::from_str(&body).map_err(|source| WeatherError::Decode {
                service: SERVICE,
                source,
            })?;

        Ok(parsed.current.temp_c)
    }
}
