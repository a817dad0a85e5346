use crate::domain::model::Meter;
use crate::domain::ports::MeterLookup;
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;

/// Read-only meter store held in memory.
///
/// Meters keep the order they were given in; lookups by id go through an index.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMeterStore {
    meters: Vec<Meter>,
    index: HashMap<String, usize>,
}

impl InMemoryMeterStore {
    pub fn new(meters: Vec<Meter>) -> Result<Self> {
        let mut index = HashMap::with_capacity(meters.len());
        for (position, meter) in meters.iter().enumerate() {
            if index.insert(meter.id.clone(), position).is_some() {
                return Err(ServiceError::DuplicateMeterError {
                    id: meter.id.clone(),
                });
            }
        }
        Ok(Self { meters, index })
    }

    /// 從 JSON 陣列字串載入
    pub fn from_json_str(content: &str) -> Result<Self> {
        let meters: Vec<Meter> = serde_json::from_str(content)?;
        Self::new(meters)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading meters from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn len(&self) -> usize {
        self.meters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meters.is_empty()
    }
}

#[async_trait]
impl MeterLookup for InMemoryMeterStore {
    async fn get_by_id(&self, id: &str) -> Result<Option<Meter>> {
        Ok(self
            .index
            .get(id)
            .and_then(|&position| self.meters.get(position))
            .cloned())
    }

    async fn get_all(&self) -> Result<Vec<Meter>> {
        Ok(self.meters.clone())
    }
}
