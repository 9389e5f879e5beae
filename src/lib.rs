//! rankboard - gamified ranking view of support-ticket resolution counts.
//!
//! Read-only dashboard backend: three JSON endpoints assemble tier
//! classifications onto rows fetched from the ticketing database (or from
//! fixtures in offline mode), plus an embedded single-page UI.

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod error;
pub mod rank;
pub mod store;

pub use config::Config;
pub use store::Store;

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Storage backend, live or fixture.
    pub store: Store,
    /// Roster for the leaderboard and history views.
    pub team: Arc<Vec<i64>>,
    /// Optional top-N cap for history responses.
    pub history_limit: Option<usize>,
}

impl AppState {
    pub fn new(store: Store, config: &Config) -> Self {
        Self {
            store,
            team: Arc::new(config.team.clone()),
            history_limit: config.history_limit,
        }
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/api/profile/:employee_id", get(api::get_profile))
        .route("/api/leaderboard", get(api::get_leaderboard))
        .route("/api/history", get(api::get_history))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
