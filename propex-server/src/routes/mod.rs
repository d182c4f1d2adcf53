//! Route table.

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{
        health::{healthz_handler, readyz_handler},
        listings::{get_listing_handler, search_listings_handler},
    },
    AppState,
};

/// Create the versioned API routes.
fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/listings", get(search_listings_handler))
        .route("/listings/{id}", get(get_listing_handler))
}

/// Assemble the full application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz_handler))
        .route("/readyz", get(readyz_handler))
        .nest("/api/v1", create_v1_router())
        // Public read-only surface; any origin may query it.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
