use std::net::SocketAddr;
use std::sync::Arc;

use gatewing_api::{app, app_config::Config, AppState};
use gatewing_inventory::FlightRegistry;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gatewing_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load config");
    tracing::info!("Starting Gatewing API on port {}", config.server.port);

    let registry =
        FlightRegistry::from_specs(&config.flights).expect("Invalid flight configuration");
    tracing::info!("Flight registry initialized with {} flights", registry.len());

    let state = AppState::new(Arc::new(registry));
    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
