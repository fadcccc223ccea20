//! HTTP surface of the service.
//!
//! One route, `GET /weather/{postal_code}`, backed by whatever
//! [`WeatherLookup`](crate::domain::ports::WeatherLookup) sits in [`AppState`].
//! Domain errors become 4xx responses with a short message; everything
//! else is logged and reported as a bare 500.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
