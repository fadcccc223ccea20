use crate::domain::ports::{LocationResolver, TemperatureResolver, WeatherLookup};
use crate::domain::WeatherReport;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Postal code -> location -> temperature. Either stage failing aborts the lookup
/// and its error is returned untouched.
pub struct WeatherService<L: LocationResolver, T: TemperatureResolver> {
    locations: L,
    temperatures: T,
}

impl<L: LocationResolver, T: TemperatureResolver> WeatherService<L, T> {
    pub fn new(locations: L, temperatures: T) -> Self {
        Self {
            locations,
            temperatures,
        }
    }
}

#[async_trait]
impl<L: LocationResolver, T: TemperatureResolver> WeatherLookup for WeatherService<L, T> {
    async fn weather_by_postal_code(&self, postal_code: &str) -> Result<WeatherReport> {
        let location = self.locations.resolve(postal_code).await?;
        tracing::debug!(
            "Postal code {} resolved to {}/{}",
            postal_code,
            location.city,
            location.region
        );

        let celsius = self.temperatures.resolve(&location).await?;

        Ok(WeatherReport::from_celsius(celsius))
    }
}
