use crate::adapters::InMemoryMeterStore;
use crate::config::ServiceConfig;
use crate::core::dispatcher::QueryDispatcher;
use crate::core::schema::{build_schema, MeterSchema};
use crate::utils::error::{Result, ServiceError};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{extract::State, http::Uri, response::Html, routing, Router};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Returns an HTML response constructing the GraphiQL web page for the given URI.
async fn graphiql(uri: Uri) -> Html<String> {
    Html(
        async_graphql::http::GraphiQLSource::build()
            .endpoint(uri.path())
            .finish(),
    )
}

/// Executes a GraphQL query and generates a response for our schema.
async fn index_handler(
    State(schema): State<MeterSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

pub fn router(schema: MeterSchema, graphiql_enabled: bool) -> Router {
    let index = if graphiql_enabled {
        routing::get(graphiql).post(index_handler)
    } else {
        routing::post(index_handler)
    };

    Router::new()
        .route("/", index)
        .route("/ready", routing::get(|| async { "ready!" }))
        .with_state(schema)
}

/// Serves the schema on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    schema: MeterSchema,
    graphiql_enabled: bool,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(schema, graphiql_enabled);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ServiceError::ServerError {
            message: e.to_string(),
        })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("❌ Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

/// Loads the meter data, binds the configured address and serves until Ctrl+C.
#[tracing::instrument(name = "meter_graphql::run", skip_all, fields(bind = %config.bind_address))]
pub async fn run(config: ServiceConfig) -> Result<()> {
    let store = InMemoryMeterStore::from_file(&config.meters_file)?;
    tracing::info!("📁 Loaded {} meters from {}", store.len(), config.meters_file);

    let schema = build_schema(QueryDispatcher::new(Arc::new(store)));
    let listener = TcpListener::bind(config.bind_address).await?;
    let local_addr = listener.local_addr()?;

    if config.graphiql {
        tracing::info!("GraphiQL IDE: http://{}", local_addr);
    }
    tracing::info!("🚀 Serving GraphQL on http://{}", local_addr);

    serve(listener, schema, config.graphiql, shutdown_signal()).await?;

    tracing::info!("✅ Server stopped");
    Ok(())
}
