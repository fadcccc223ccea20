use crate::adapters::{ViaCepClient, WeatherApiClient};
use crate::config::ServiceConfig;
use crate::core::WeatherService;
use crate::http::{create_router, AppState};
use crate::utils::error::Result;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Wires both upstream clients into a [`WeatherService`] and mounts it on the router.
pub fn build_router(config: &ServiceConfig) -> Result<Router> {
    let locations = ViaCepClient::new(&config.viacep.base_url, config.viacep_timeout())?;
    let temperatures = WeatherApiClient::new(
        &config.weather_api.base_url,
        &config.weather_api.api_key,
        config.weather_api_timeout(),
    )?;

    let service = WeatherService::new(locations, temperatures);
    Ok(create_router(AppState::new(Arc::new(service))))
}

/// Serves on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

pub async fn run(config: ServiceConfig) -> Result<()> {
    let router = build_router(&config)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server running on {}", listener.local_addr()?);

    serve(listener, router, shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, stopping server...");
}
