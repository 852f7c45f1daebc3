use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::Value;

use crate::error::StoreError;

/// Generic persistence abstraction: kind-keyed collections of JSON records.
/// Each record is an object whose `"id"` key is its primary key. Swapping in a
/// real database means implementing these five operations and nothing else.
pub trait RecordStore: Send + Sync {
    fn find_by_id(&self, kind: &str, id: &str) -> Result<Option<Value>, StoreError>;
    fn find_all(&self, kind: &str) -> Result<Vec<Value>, StoreError>;
    fn insert(&self, kind: &str, record: Value) -> Result<Value, StoreError>;
    fn update(&self, kind: &str, id: &str, record: Value) -> Result<Value, StoreError>;
    fn remove(&self, kind: &str, id: &str) -> Result<bool, StoreError>;
}

type Collections = HashMap<String, HashMap<String, Value>>;

/// In-memory `RecordStore` backing the service.
pub struct Database {
    records: Arc<Mutex<Collections>>,
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}

impl Database {
    pub fn new() -> Self {
        Database {
            records: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Collections>, StoreError> {
        self.records
            .lock()
            .map_err(|_| StoreError::Unavailable("store mutex poisoned".to_string()))
    }
}

impl RecordStore for Database {
    fn find_by_id(&self, kind: &str, id: &str) -> Result<Option<Value>, StoreError> {
        let records = self.lock()?;
        Ok(records.get(kind).and_then(|kept| kept.get(id)).cloned())
    }

    fn find_all(&self, kind: &str) -> Result<Vec<Value>, StoreError> {
        let records = self.lock()?;
        Ok(records
            .get(kind)
            .map(|kept| kept.values().cloned().collect())
            .unwrap_or_default())
    }

    fn insert(&self, kind: &str, record: Value) -> Result<Value, StoreError> {
        let id = record
            .get("id")
            .and_then(Value::as_str)
            .ok_or(StoreError::MissingId)?
            .to_string();
        let mut records = self.lock()?;
        records
            .entry(kind.to_string())
            .or_default()
            .insert(id, record.clone());
        Ok(record)
    }

    fn update(&self, kind: &str, id: &str, record: Value) -> Result<Value, StoreError> {
        let mut records = self.lock()?;
        records
            .entry(kind.to_string())
            .or_default()
            .insert(id.to_string(), record.clone());
        Ok(record)
    }

    fn remove(&self, kind: &str, id: &str) -> Result<bool, StoreError> {
        let mut records = self.lock()?;
        Ok(records
            .get_mut(kind)
            .map(|kept| kept.remove(id).is_some())
            .unwrap_or(false))
    }
}
