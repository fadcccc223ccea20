use crate::domain::model::{Location, WeatherReport};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Maps a raw postal code to the city/state it belongs to.
#[async_trait]
pub trait LocationResolver: Send + Sync {
    async fn resolve(&self, postal_code: &str) -> Result<Location>;
}

/// Current temperature, in Celsius, at a resolved location.
#[async_trait]
pub trait TemperatureResolver: Send + Sync {
    async fn resolve(&self, location: &Location) -> Result<f64>;
}

#[async_trait]
pub trait WeatherLookup: Send + Sync {
    async fn weather_by_postal_code(&self, postal_code: &str) -> Result<WeatherReport>;
}
