use crate::domain::ports::LocationResolver;
use crate::domain::{Location, PostalCode};
use crate::utils::error::{Result, WeatherError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const SERVICE: &str = "ViaCEP";

#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
    // Older deployments send `"erro": "true"`, newer ones `"erro": true`.
    #[serde(default)]
    erro: Option<serde_json::Value>,
}

impl ViaCepResponse {
    fn is_not_found(&self) -> bool {
        let flagged = match &self.erro {
            Some(serde_json::Value::Bool(b)) => *b,
            Some(serde_json::Value::String(s)) => s == "true",
            _ => false,
        };
        flagged || self.localidade.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ViaCepClient {
    base_url: String,
    client: Client,
}

impl ViaCepClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(super::USER_AGENT)
            .build()
            .map_err(|source| WeatherError::Upstream {
                service: SERVICE,
                source,
            })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn lookup_url(&self, code: &PostalCode) -> String {
        format!("{}/{}/json/", self.base_url, code)
    }
}

#[async_trait]
impl LocationResolver for ViaCepClient {
    async fn resolve(&self, postal_code: &str) -> Result<Location> {
        let code = PostalCode::parse(postal_code)?;
        let url = self.lookup_url(&code);

        tracing::debug!("Querying {} at {}", SERVICE, url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| WeatherError::Upstream {
                service: SERVICE,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{} returned status {} for {}", SERVICE, status, code);
            return Err(WeatherError::UnexpectedStatus {
                service: SERVICE,
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| WeatherError::Upstream {
            service: SERVICE,
            source,
        })?;
        let parsed: ViaCepResponse =
            serde_json::from_str(&body).map_err(|source| WeatherError::Decode {
                service: SERVICE,
                source,
            })?;

        if parsed.is_not_found() {
            tracing::debug!("{} has no entry for {}", SERVICE, code);
            return Err(WeatherError::PostalCodeNotFound);
        }

        Ok(Location {
            city: parsed.localidade,
            region: parsed.uf,
        })
    }
}
