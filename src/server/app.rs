//! Axum application setup
//!
//! Creates and configures the Axum application with routes and middleware.

use crate::{
    server::{cors, handlers},
    store::{ConfigStore, PowerSetting},
};
use axum::{Router, middleware};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Path prefix of the read endpoints
pub const GET_PREFIX: &str = "/get/peakshaving";
/// Path prefix of the write endpoints
pub const SET_PREFIX: &str = "/set/peakshaving";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// The power limits served by every endpoint
    pub store: Arc<ConfigStore>,
}

impl AppState {
    /// Wrap an existing store
    pub fn new(store: Arc<ConfigStore>) -> Self {
        Self { store }
    }
}

/// Path of the read endpoint for `setting`
pub fn get_path(setting: PowerSetting) -> String {
    format!("{}/{}", GET_PREFIX, setting.key())
}

/// Path of the write endpoint for `setting`
pub fn set_path(setting: PowerSetting) -> String {
    format!("{}/{}", SET_PREFIX, setting.key())
}

/// Create the main Axum application with routes and middleware
///
/// CORS is attached with `route_layer`, so unknown paths get a bare 404.
pub fn create_app(store: Arc<ConfigStore>) -> Router {
    let state = AppState::new(store);

    let [origin, methods, headers] = cors::cors_headers();

    PowerSetting::ALL
        .into_iter()
        .fold(Router::new(), |router, setting| {
            router
                .route(&set_path(setting), handlers::write_setting(setting))
                .route(&get_path(setting), handlers::read_setting(setting))
        })
        .route_layer(
            ServiceBuilder::new()
                .layer(cors::header_layer(origin.0, origin.1))
                .layer(cors::header_layer(methods.0, methods.1))
                .layer(cors::header_layer(headers.0, headers.1))
                .layer(middleware::from_fn(cors::short_circuit_preflight)),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
