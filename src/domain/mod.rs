// Domain layer: models and ports. Nothing here talks to the network.

pub mod model;
pub mod ports;
pub mod postal_code;

pub use model::{Location, WeatherReport};
pub use postal_code::PostalCode;
