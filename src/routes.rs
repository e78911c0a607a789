//! Route table for the HTTP API.

use axum::{
    Router,
    routing::{get, post, put},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers, stores::SharedStore};

/// Build the application router over `store`.
///
/// Paths match the ones existing clients already call.
pub fn build_router(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health_check))
        .route(
            "/my-transactions",
            get(handlers::transactions::list_transactions),
        )
        .route("/overview", get(handlers::reports::get_overview))
        .route(
            "/add-transactions",
            post(handlers::transactions::add_transaction),
        )
        .route(
            "/transactions/{id}",
            get(handlers::transactions::get_transaction)
                .delete(handlers::transactions::delete_transaction),
        )
        .route(
            "/transactions/update/{id}",
            put(handlers::transactions::update_transaction),
        )
        .route("/reports/{email}", get(handlers::reports::get_report))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                // Any origin may call the API
                .layer(CorsLayer::permissive()),
        )
        // Share the store with all handlers via State extraction
        .with_state(store)
}
