use crate::domain::model::Meter;
use crate::domain::ports::MeterLookup;
use crate::utils::error::{Result, ServiceError};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// The read operations the dispatcher knows how to route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryOperation {
    GetMeterById,
    GetAllMeters,
}

impl QueryOperation {
    pub const ALL: [QueryOperation; 2] = [
        QueryOperation::GetMeterById,
        QueryOperation::GetAllMeters,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            QueryOperation::GetMeterById => "getMeterById",
            QueryOperation::GetAllMeters => "getAllMeters",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|operation| operation.name() == name)
            .ok_or_else(|| ServiceError::UnknownOperationError {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for QueryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named arguments accompanying a query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryArguments(HashMap<String, String>);

impl QueryArguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    fn require(&self, operation: QueryOperation, name: &str) -> Result<&str> {
        self.get(name)
            .ok_or_else(|| ServiceError::MissingArgumentError {
                operation: operation.name().to_string(),
                argument: name.to_string(),
            })
    }
}

/// Result of a dispatched operation, shaped like the GraphQL field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryOutcome {
    Single(Option<Meter>),
    Many(Vec<Meter>),
}

/// Routes read queries to an injected [`MeterLookup`].
///
/// The dispatcher holds no state of its own. Whatever the lookup returns,
/// including "not found" and errors, is passed back unchanged.
#[derive(Clone)]
pub struct QueryDispatcher {
    lookup: Arc<dyn MeterLookup>,
}

impl QueryDispatcher {
    pub fn new(lookup: Arc<dyn MeterLookup>) -> Self {
        Self { lookup }
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Meter>> {
        tracing::debug!(id, "getMeterById");
        self.lookup.get_by_id(id).await
    }

    pub async fn get_all(&self) -> Result<Vec<Meter>> {
        tracing::debug!("getAllMeters");
        self.lookup.get_all().await
    }

    pub async fn dispatch(
        &self,
        operation: QueryOperation,
        arguments: &QueryArguments,
    ) -> Result<QueryOutcome> {
        match operation {
            QueryOperation::GetMeterById => {
                let id = arguments.require(operation, "id")?;
                Ok(QueryOutcome::Single(self.get_by_id(id).await?))
            }
            QueryOperation::GetAllMeters => Ok(QueryOutcome::Many(self.get_all().await?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        GetById(String),
        GetAll,
    }

    /// Lookup double that records every call and answers from a fixed list.
    #[derive(Default)]
    struct RecordingLookup {
        meters: Vec<Meter>,
        fail: bool,
        calls: Mutex<Vec<Call>>,
    }

    impl RecordingLookup {
        fn with_meters(meters: Vec<Meter>) -> Self {
            Self {
                meters,
                ..Self::default()
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MeterLookup for RecordingLookup {
        async fn get_by_id(&self, id: &str) -> Result<Option<Meter>> {
            self.calls.lock().unwrap().push(Call::GetById(id.to_string()));
            if self.fail {
                return Err(ServiceError::LookupError {
                    message: "backend unavailable".to_string(),
                });
            }
            Ok(self.meters.iter().find(|m| m.id == id).cloned())
        }

        async fn get_all(&self) -> Result<Vec<Meter>> {
            self.calls.lock().unwrap().push(Call::GetAll);
            if self.fail {
                return Err(ServiceError::LookupError {
                    message: "backend unavailable".to_string(),
                });
            }
            Ok(self.meters.clone())
        }
    }

    fn dispatcher_for(lookup: &Arc<RecordingLookup>) -> QueryDispatcher {
        QueryDispatcher::new(lookup.clone())
    }

    #[test]
    fn test_get_by_id_passes_identifier_through() {
        let lookup = Arc::new(RecordingLookup::with_meters(vec![Meter::new("m1", "Main")]));
        let dispatcher = dispatcher_for(&lookup);

        let meter = tokio_test::block_on(dispatcher.get_by_id("m1")).unwrap();

        assert_eq!(meter, Some(Meter::new("m1", "Main")));
        assert_eq!(lookup.calls(), vec![Call::GetById("m1".to_string())]);
    }

    #[test]
    fn test_get_by_id_does_not_normalize_identifier() {
        let lookup = Arc::new(RecordingLookup::default());
        let dispatcher = dispatcher_for(&lookup);

        let _ = tokio_test::block_on(dispatcher.get_by_id("  M1 ")).unwrap();
        let _ = tokio_test::block_on(dispatcher.get_by_id("")).unwrap();

        assert_eq!(
            lookup.calls(),
            vec![Call::GetById("  M1 ".to_string()), Call::GetById(String::new())]
        );
    }

    #[test]
    fn test_get_by_id_missing_is_none() {
        let lookup = Arc::new(RecordingLookup::with_meters(vec![Meter::new("m1", "Main")]));
        let dispatcher = dispatcher_for(&lookup);

        let meter = tokio_test::block_on(dispatcher.get_by_id("missing")).unwrap();
        assert!(meter.is_none());
    }

    #[test]
    fn test_lookup_errors_propagate_unchanged() {
        let lookup = Arc::new(RecordingLookup::failing());
        let dispatcher = dispatcher_for(&lookup);

        match tokio_test::block_on(dispatcher.get_by_id("m1")) {
            Err(ServiceError::LookupError { message }) => {
                assert_eq!(message, "backend unavailable")
            }
            other => panic!("expected lookup error, got {:?}", other),
        }
        assert!(matches!(
            tokio_test::block_on(dispatcher.get_all()),
            Err(ServiceError::LookupError { .. })
        ));
    }

    #[test]
    fn test_get_all_empty() {
        let lookup = Arc::new(RecordingLookup::default());
        let dispatcher = dispatcher_for(&lookup);

        let meters = tokio_test::block_on(dispatcher.get_all()).unwrap();
        assert!(meters.is_empty());
        assert_eq!(lookup.calls(), vec![Call::GetAll]);
    }

    #[test]
    fn test_get_all_preserves_order() {
        let meters = vec![
            Meter::new("c", "Third"),
            Meter::new("a", "First"),
            Meter::new("b", "Second"),
        ];
        let lookup = Arc::new(RecordingLookup::with_meters(meters.clone()));
        let dispatcher = dispatcher_for(&lookup);

        assert_eq!(tokio_test::block_on(dispatcher.get_all()).unwrap(), meters);
    }

    #[test]
    fn test_operation_names() {
        for operation in QueryOperation::ALL {
            assert_eq!(QueryOperation::from_name(operation.name()).unwrap(), operation);
        }
        assert_eq!(QueryOperation::GetMeterById.to_string(), "getMeterById");
        assert!(matches!(
            QueryOperation::from_name("getmeterbyid"),
            Err(ServiceError::UnknownOperationError { .. })
        ));
        assert!(QueryOperation::from_name("author").is_err());
    }

    #[tokio::test]
    async fn test_dispatch_routes_by_operation() {
        let lookup = Arc::new(RecordingLookup::with_meters(vec![
            Meter::new("m1", "Main"),
            Meter::new("m2", "Roof"),
        ]));
        let dispatcher = dispatcher_for(&lookup);

        let single = dispatcher
            .dispatch(
                QueryOperation::GetMeterById,
                &QueryArguments::new().with("id", "m2"),
            )
            .await
            .unwrap();
        assert_eq!(single, QueryOutcome::Single(Some(Meter::new("m2", "Roof"))));

        let many = dispatcher
            .dispatch(
                QueryOperation::GetAllMeters,
                &QueryArguments::new().with("id", "ignored"),
            )
            .await
            .unwrap();
        assert!(matches!(many, QueryOutcome::Many(ref meters) if meters.len() == 2));

        assert_eq!(
            lookup.calls(),
            vec![Call::GetById("m2".to_string()), Call::GetAll]
        );
    }

    #[tokio::test]
    async fn test_dispatch_requires_id() {
        let lookup = Arc::new(RecordingLookup::default());
        let dispatcher = dispatcher_for(&lookup);

        let result = dispatcher
            .dispatch(QueryOperation::GetMeterById, &QueryArguments::new())
            .await;

        match result {
            Err(ServiceError::MissingArgumentError {
                operation,
                argument,
            }) => {
                assert_eq!(operation, "getMeterById");
                assert_eq!(argument, "id");
            }
            other => panic!("expected missing argument, got {:?}", other),
        }
        assert!(lookup.calls().is_empty());
    }

    #[test]
    fn test_outcome_serializes_like_graphql_value() {
        let single = QueryOutcome::Single(None);
        assert_eq!(serde_json::to_value(&single).unwrap(), serde_json::Value::Null);

        let many = QueryOutcome::Many(vec![Meter::new("m1", "Main")]);
        assert_eq!(
            serde_json::to_value(&many).unwrap(),
            serde_json::json!([{"id": "m1", "name": "Main", "location": null}])
        );
    }
}
