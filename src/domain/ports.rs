use crate::domain::model::Meter;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Storage and retrieval of meters, injected into the query layer.
///
/// A missing meter is `Ok(None)`; anything that goes wrong inside the
/// collaborator is an `Err` and is handed back to callers untouched.
#[async_trait]
pub trait MeterLookup: Send + Sync {
    async fn get_by_id(&self, id: &str) -> Result<Option<Meter>>;
    async fn get_all(&self) -> Result<Vec<Meter>>;
}
