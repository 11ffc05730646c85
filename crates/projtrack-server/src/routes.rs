//! API route definitions

use axum::{
    Router,
    routing::get,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{analytics, health, projects},
    state::AppState,
};

/// API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Projects
        .route(
            "/project",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/project/:id",
            get(projects::get_project)
                .put(projects::update_project)
                .delete(projects::delete_project),
        )
        // Analytics
        .route("/analytics/graphics", get(analytics::get_graphics))
        .route("/analytics/:id", get(analytics::get_analysis))
}

/// Complete application with middleware and state
pub fn app(state: AppState) -> Router {
    api_routes()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
