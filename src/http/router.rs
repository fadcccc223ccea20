use crate::http::handlers;
use crate::http::state::AppState;
use axum::routing::get;
use axum::Router;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/weather/", get(handlers::get_weather))
        .route("/weather/{postal_code}", get(handlers::get_weather))
        .fallback(handlers::not_found)
        .with_state(state)
}
