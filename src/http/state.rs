use crate::domain::ports::WeatherLookup;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub weather: Arc<dyn WeatherLookup>,
}

impl AppState {
    pub fn new(weather: Arc<dyn WeatherLookup>) -> Self {
        Self { weather }
    }
}
