//! API Module
//!
//! HTTP layer of the server.
//! Each submodule handles endpoints for a specific concern.

pub mod graphql;
pub mod health;

use std::time::Duration;

use axum::{Router, routing::get};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::graphql::JobSchema;

/// Create the main API router with all endpoints
pub fn create_router(schema: JobSchema, request_timeout: Duration) -> Router {
    Router::new()
        // Playground
        .route("/", get(graphql::graphql_playground))
        // GraphQL execution
        .route(
            graphql::GRAPHQL_PATH,
            get(graphql::graphql_handler)
                .post(graphql::graphql_handler)
                .options(graphql::graphql_options),
        )
        // Health check
        .route("/health", get(health::health_check))
        // Add state and middleware
        .with_state(schema)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}
