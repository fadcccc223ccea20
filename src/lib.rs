pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod server;
pub mod utils;

pub use adapters::{ViaCepClient, WeatherApiClient};
pub use config::{CliArgs, ServiceConfig};
pub use crate::core::WeatherService;
pub use domain::{Location, PostalCode, WeatherReport};
pub use utils::error::{Result, WeatherError};
