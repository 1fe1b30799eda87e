// ============================
// crates/backend-lib/src/router.rs
// ============================
//! HTTP router assembly.
use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::middleware::require_owner;
use crate::storage::DataStore;
use crate::AppState;

/// Create the application router
pub fn create_router<S: DataStore + Clone + Send + Sync + 'static>(
    state: Arc<AppState<S>>,
) -> Router {
    let data_routes = Router::new()
        .route(
            "/data/{owner}",
            get(handlers::data::read)
                .post(handlers::data::write)
                .delete(handlers::data::remove),
        )
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            require_owner,
        ));

    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .merge(data_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
