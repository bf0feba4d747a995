use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::Html,
    routing::{MethodRouter, get, post},
};
use tokio::net::TcpListener;

use super::BookqlSchema;
use crate::config::ServerSettings;
use crate::error::Result;

async fn graphql_handler(
    State(schema): State<BookqlSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

async fn graphiql_handler() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn health_handler() -> &'static str {
    "OK"
}

/// Routes: `POST /graphql`, `GET /graphql` (GraphiQL, when enabled), `GET /health`.
pub fn router(schema: BookqlSchema, graphiql: bool) -> Router {
    let mut graphql: MethodRouter<BookqlSchema> = post(graphql_handler);
    if graphiql {
        graphql = graphql.get(graphiql_handler);
    }

    Router::new()
        .route("/graphql", graphql)
        .route("/health", get(health_handler))
        .with_state(schema)
}

/// Serves the schema until the process is stopped.
pub async fn run_server(schema: BookqlSchema, settings: &ServerSettings) -> Result<()> {
    let addr = format!("{}:{}", settings.host, settings.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, graphiql = settings.graphiql, "GraphQL server listening");

    axum::serve(listener, router(schema, settings.graphiql)).await?;
    Ok(())
}
