use crate::http::dto::ErrorResponse;
use crate::utils::error::WeatherError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Status and public message for an error. Only domain errors say what went wrong.
pub fn status_and_message(err: &WeatherError) -> (StatusCode, &'static str) {
    match err {
        WeatherError::InvalidPostalCode => (StatusCode::UNPROCESSABLE_ENTITY, "invalid zipcode"),
        WeatherError::PostalCodeNotFound => (StatusCode::NOT_FOUND, "can not find zipcode"),
        WeatherError::WeatherNotFound => (StatusCode::NOT_FOUND, "weather not found"),
        WeatherError::InvalidLocation => (StatusCode::BAD_REQUEST, "invalid location"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal server error"),
    }
}

impl IntoResponse for WeatherError {
    fn into_response(self) -> Response {
        let (status, message) = status_and_message(&self);

        if self.is_domain() {
            tracing::info!("Request rejected ({}): {}", status.as_u16(), self);
        } else {
            tracing::error!(
                "Request failed: {} (category: {:?})",
                self,
                self.category()
            );
        }

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
