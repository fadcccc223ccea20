use crate::utils::error::{Result, WeatherError};
use crate::utils::validation::{validate_range, validate_required_string, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_VIACEP_BASE_URL: &str = "https://viacep.com.br/ws";
pub const DEFAULT_WEATHER_API_BASE_URL: &str = "https://api.weatherapi.com/v1";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

const MAX_TIMEOUT_SECONDS: u64 = 300;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub server: ServerConfig,
    pub viacep: ViaCepConfig,
    pub weather_api: WeatherApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViaCepConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl Default for ViaCepConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_VIACEP_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_WEATHER_API_BASE_URL.to_string(),
            api_key: String::new(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl ServiceConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML, replacing `${VAR}` with the value of that environment variable.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;

        toml::from_str(&processed).map_err(|e| WeatherError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| WeatherError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        // Unset variables are left as-is so the value fails validation visibly.
        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Overlays `PORT`, `WEATHER_API_KEY`, `WEATHER_API_BASE_URL` and
    /// `VIACEP_BASE_URL` as returned by `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port =
                port.trim()
                    .parse()
                    .map_err(|_| WeatherError::InvalidConfigValueError {
                        field: "PORT".to_string(),
                        value: port.clone(),
                        reason: "not a valid port number".to_string(),
                    })?;
        }
        if let Some(key) = lookup("WEATHER_API_KEY") {
            self.weather_api.api_key = key;
        }
        if let Some(url) = lookup("WEATHER_API_BASE_URL") {
            self.weather_api.base_url = url;
        }
        if let Some(url) = lookup("VIACEP_BASE_URL") {
            self.viacep.base_url = url;
        }
        Ok(())
    }

    pub fn viacep_timeout(&self) -> Duration {
        Duration::from_secs(self.viacep.timeout_seconds)
    }

    pub fn weather_api_timeout(&self) -> Duration {
        Duration::from_secs(self.weather_api.timeout_seconds)
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validate_range("server.port", self.server.port, 1, u16::MAX)?;
        validate_url("viacep.base_url", &self.viacep.base_url)?;
        validate_range(
            "viacep.timeout_seconds",
            self.viacep.timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;
        validate_url("weather_api.base_url", &self.weather_api.base_url)?;
        validate_range(
            "weather_api.timeout_seconds",
            self.weather_api.timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;

        if self.weather_api.api_key.contains("${") {
            return Err(WeatherError::InvalidConfigValueError {
                field: "weather_api.api_key".to_string(),
                value: self.weather_api.api_key.clone(),
                reason: "unresolved environment variable".to_string(),
            });
        }
        validate_required_string("WEATHER_API_KEY", &self.weather_api.api_key)?;

        Ok(())
    }
}
