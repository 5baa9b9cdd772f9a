use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, add_copies, borrow_book, get_availability, late_fee, return_book,
};

/// Creates the API router with all lending endpoints
///
/// Command endpoints (Write operations):
/// - POST /books/:book_id/copies - Add copies to the inventory
/// - POST /books/:book_id/borrow - Borrow one copy
/// - POST /books/:book_id/return - Return one copy
///
/// Query endpoints (Read operations):
/// - GET /books/:book_id - Available copies
/// - GET /late-fee - Dynamic late fee
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Command endpoints (Write operations)
        .route("/books/:book_id/copies", post(add_copies))
        .route("/books/:book_id/borrow", post(borrow_book))
        .route("/books/:book_id/return", post(return_book))
        // Query endpoints (Read operations)
        .route("/books/:book_id", get(get_availability))
        .route("/late-fee", get(late_fee))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
