// Adapters layer: HTTP clients for the two upstream services.

pub mod viacep;
pub mod weather_api;

pub use viacep::ViaCepClient;
pub use weather_api::WeatherApiClient;

const USER_AGENT: &str = concat!("cep-weather/", env!("CARGO_PKG_VERSION"));
