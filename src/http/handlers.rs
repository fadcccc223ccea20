use crate::domain::WeatherReport;
use crate::http::dto::ErrorResponse;
use crate::http::state::AppState;
use crate::utils::error::WeatherError;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

/// Serves both `/weather/{postal_code}` and the bare `/weather/`. A missing or
/// undecodable segment is an invalid postal code, never a routing error.
pub async fn get_weather(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<WeatherReport>, WeatherError> {
    let postal_code = match path {
        Ok(Path(postal_code)) => postal_code,
        Err(rejection) => {
            tracing::debug!("Unusable postal code segment: {}", rejection);
            return Err(WeatherError::InvalidPostalCode);
        }
    };
    tracing::info!("GET /weather/{}", postal_code);

    let report = state.weather.weather_by_postal_code(&postal_code).await?;

    tracing::debug!(
        "Weather for {}: {}C / {}F / {}K",
        postal_code,
        report.temp_c,
        report.temp_f,
        report.temp_k
    );
    Ok(Json(report))
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("not found")))
}
