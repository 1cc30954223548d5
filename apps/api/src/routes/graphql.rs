//! GraphQL HTTP endpoint
//!
//! Mounts `POST /graphql` and the development playground, and builds the
//! per-request context from the Authorization header.

use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::Extension,
    http::HeaderMap,
    routing::{get, post},
    Router,
};

use crate::graphql::QuorumSchema;
use crate::middleware::bearer_token;
use crate::models::AuthUser;
use crate::services::AuthService;

/// Create the GraphQL router
pub fn graphql_router(schema: QuorumSchema, auth_service: AuthService) -> Router {
    Router::new()
        .route("/graphql", post(graphql_handler))
        .route("/graphql/playground", get(graphql_playground))
        .layer(Extension(schema))
        .layer(Extension(auth_service))
}

/// GraphQL handler that executes operations against the schema
///
/// When the Authorization header carries a verifiable bearer token, the
/// caller's identity is injected into the GraphQL request data as
/// `AuthUser`. Any verification failure is logged and the request
/// proceeds anonymously - protected resolvers are the ones that reject
/// it.
async fn graphql_handler(
    Extension(schema): Extension<QuorumSchema>,
    Extension(auth_service): Extension<AuthService>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();

    if let Some(token) = bearer_token(&headers) {
        match auth_service.verify_token(token) {
            Ok(claims) => {
                request = request.data(AuthUser {
                    user_id: claims.sub,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "bearer token rejected, continuing anonymously");
            }
        }
    }

    schema.execute(request).await.into()
}

/// GraphQL Playground handler for development
async fn graphql_playground() -> impl axum::response::IntoResponse {
    axum::response::Html(async_graphql::http::playground_source(
        async_graphql::http::GraphQLPlaygroundConfig::new("/graphql"),
    ))
}
