//! Environmental Monitoring Dashboard - Backend Server
//!
//! Loads the daily sensor dataset and the pre-trained AQI regression model
//! at startup, evaluates threshold alerts and daily reports once into an
//! immutable snapshot, and serves them over a JSON API.

use axum::{routing::get, Router};
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod data;
mod error;
mod external;
mod handlers;
mod routes;
mod services;
mod snapshot;

pub use config::Config;

use shared::AqiModel;
use snapshot::MonitorSnapshot;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Current immutable snapshot of readings, alerts, and reports.
    /// Swapped wholesale on an explicit reload; handlers clone the `Arc`
    /// out and never hold the lock across an await.
    pub snapshot: Arc<RwLock<Arc<MonitorSnapshot>>>,
    pub model: Arc<AqiModel>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Grab the current snapshot.
    pub fn snapshot(&self) -> Arc<MonitorSnapshot> {
        self.snapshot
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "enviro_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Environmental Monitoring Server");
    tracing::info!("Environment: {}", config.environment);

    // Load the dataset and build the initial snapshot
    tracing::info!("Loading readings from {}", config.data.readings_path);
    let readings = data::load_readings(&config.data.readings_path)?;
    let snapshot = MonitorSnapshot::build(readings);
    tracing::info!(
        readings = snapshot.readings().len(),
        alerts = snapshot.alerts().len(),
        reports = snapshot.daily_reports().len(),
        "Snapshot built"
    );

    // Load the pre-trained AQI model
    tracing::info!("Loading AQI model from {}", config.data.model_path);
    let model = external::load_model(&config.data.model_path)?;

    // Create application state
    let state = AppState {
        snapshot: Arc::new(RwLock::new(Arc::new(snapshot))),
        model: Arc::new(model),
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Environmental Monitoring Dashboard API v1.0"
}
