use crate::adapters::InMemoryMeterStore;
use crate::config::ServiceConfig;
use crate::core::dispatcher::{QueryArguments, QueryDispatcher, QueryOperation};
use crate::utils::error::Result;
use std::sync::Arc;

/// Runs one named operation against the configured data file.
///
/// Returns the outcome rendered as pretty JSON, in the same shape the
/// GraphQL field would produce.
pub async fn run_query(
    config: &ServiceConfig,
    operation: &str,
    id: Option<&str>,
) -> Result<String> {
    let operation = QueryOperation::from_name(operation)?;

    let store = InMemoryMeterStore::from_file(&config.meters_file)?;
    let dispatcher = QueryDispatcher::new(Arc::new(store));

    let mut arguments = QueryArguments::new();
    if let Some(id) = id {
        arguments = arguments.with("id", id);
    }

    let outcome = dispatcher.dispatch(operation, &arguments).await?;
    Ok(serde_json::to_string_pretty(&outcome)?)
}
