pub mod cli;
pub mod service_config;

pub use cli::CliArgs;
pub use service_config::{ServerConfig, ServiceConfig, ViaCepConfig, WeatherApiConfig};
