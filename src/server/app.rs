use anyhow::{anyhow, Result};
use axum::{http::Method, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

#[cfg(feature = "graphql")]
use crate::graphql::{build_schema, GraphQLContext, GraphQLSchema};
use crate::services::WilderService;
use std::sync::Arc;

use super::handlers::health;

#[derive(Clone)]
pub struct AppState {
    pub wilder_service: Arc<WilderService>,
    #[cfg(feature = "graphql")]
    pub graphql_schema: GraphQLSchema,
}

pub fn create_app(wilder_service: Arc<WilderService>, cors_origin: Option<&str>) -> Result<Router> {
    #[cfg(feature = "graphql")]
    let graphql_schema = build_schema(GraphQLContext::new(wilder_service.clone()));

    let state = AppState {
        wilder_service,
        #[cfg(feature = "graphql")]
        graphql_schema,
    };

    let cors = match cors_origin {
        Some(origin) => CorsLayer::new().allow_origin(
            origin
                .parse::<axum::http::HeaderValue>()
                .map_err(|e| anyhow!("Invalid CORS origin: {}", e))?,
        ),
        None => CorsLayer::new().allow_origin(Any),
    }
    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
    .allow_headers(Any)
    .allow_credentials(false);

    let mut app = Router::new()
        // Health check endpoint
        .route("/health", get(health::health_check));

    #[cfg(feature = "graphql")]
    {
        app = app.route("/graphql", get(graphql_playground).post(graphql_handler));
    }

    let app = app
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    Ok(app)
}

#[cfg(feature = "graphql")]
async fn graphql_handler(
    axum::extract::State(state): axum::extract::State<AppState>,
    req: async_graphql_axum::GraphQLRequest,
) -> async_graphql_axum::GraphQLResponse {
    tracing::debug!("GraphQL request received");
    let response = state.graphql_schema.execute(req.into_inner()).await;
    if response.is_err() {
        tracing::warn!("GraphQL request failed: {:?}", response.errors);
    }
    response.into()
}

#[cfg(feature = "graphql")]
async fn graphql_playground() -> impl axum::response::IntoResponse {
    axum::response::Html(async_graphql::http::playground_source(
        async_graphql::http::GraphQLPlaygroundConfig::new("/graphql"),
    ))
}
