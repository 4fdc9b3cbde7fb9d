//! # Timetable API
//!
//! The web server for school timetables. It serves teacher and class weekly
//! schedules and checks proposed lessons against them for time conflicts.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Turn requests into calls on the timetable core
//! - **Middleware**: Error-to-response mapping
//! - **Repository**: Where schedules live between requests
//! - **Seed**: The static timetable the repository starts from
//! - **Config**: Environment-driven server settings

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Error handling shared by all handlers
pub mod middleware;
/// Schedule storage behind the handlers
pub mod repository;
/// Route definitions and API endpoint structure
pub mod routes;
/// Built-in and file-based seed timetables
pub mod seed;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use eyre::{Result, WrapErr};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use crate::repository::{InMemoryScheduleRepository, ScheduleRepository};
use crate::seed::SeedData;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    pub repository: Arc<dyn ScheduleRepository>,
}

impl ApiState {
    pub fn new(repository: Arc<dyn ScheduleRepository>) -> Self {
        Self { repository }
    }

    /// State backed by an in-memory repository loaded from `seed`.
    pub fn seeded(seed: SeedData) -> Result<Self> {
        let schedules = seed
            .into_schedules()
            .wrap_err("Seed timetable is inconsistent")?;
        Ok(Self::new(Arc::new(InMemoryScheduleRepository::new(
            schedules,
        ))))
    }
}

/// Builds the router with every route and request tracing attached.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Teacher and class timetable endpoints
        .merge(routes::schedule::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .wrap_err_with(|| format!("Invalid CORS origin {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(origins))
}

/// Starts the API server with the provided configuration
///
/// Sets up logging, loads the seed timetable, configures routes and serves
/// until the listener fails.
pub async fn start_server(config: config::ApiConfig) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let seed = match &config.seed_path {
        Some(path) => {
            info!("Loading timetable from {}", path.display());
            SeedData::from_path(path)?
        }
        None => SeedData::builtin().wrap_err("Built-in timetable is invalid")?,
    };
    let state = Arc::new(ApiState::seeded(seed)?);

    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)?),
        None => app,
    };

    let app = app.layer(
        ServiceBuilder::new().layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
