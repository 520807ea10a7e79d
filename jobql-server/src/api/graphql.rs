//! GraphQL API Handlers
//!
//! HTTP bindings of the GraphQL engine: the execution endpoint (GET and
//! POST), its OPTIONS answer and the interactive playground.

use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse},
};

use crate::graphql::JobSchema;

pub const GRAPHQL_PATH: &str = "/query";

/// GET|POST /query
///
/// GET reads `query`, `operationName`, `variables` and `extensions` from the
/// query string; POST reads a JSON body.
pub async fn graphql_handler(
    State(schema): State<JobSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// OPTIONS /query
pub async fn graphql_options() -> impl IntoResponse {
    (StatusCode::NO_CONTENT, [(header::ALLOW, "OPTIONS, GET, POST")])
}

/// GET /
pub async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(
        GraphQLPlaygroundConfig::new(GRAPHQL_PATH).title("GraphQL playground"),
    ))
}
