// src/db/memory.rs
//
// In-process document store for tests. Keeps documents per collection in
// insertion order and can be switched into a failing mode to simulate an
// unreachable database.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::db::{Collection, DocumentStore, StoreError};

#[derive(Default)]
pub struct MemoryDocumentStore {
    docs: RwLock<HashMap<Collection, Vec<Value>>>,
    writes: AtomicUsize,
    unavailable: AtomicBool,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `insert_one` calls so far.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Place a raw document directly, bypassing record encoding.
    pub async fn seed(&self, collection: Collection, doc: Value) {
        self.docs.write().await.entry(collection).or_default().push(doc);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert_one(&self, collection: Collection, doc: Value) -> Result<(), StoreError> {
        self.check_available()?;
        self.docs.write().await.entry(collection).or_default().push(doc);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn find(&self, collection: Collection, limit: i64) -> Result<Vec<Value>, StoreError> {
        self.check_available()?;
        let limit = usize::try_from(limit).unwrap_or(0);
        let docs = self.docs.read().await;
        Ok(docs
            .get(&collection)
            .map(|list| list.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }

    async fn find_one(
        &self,
        collection: Collection,
        field: &str,
        value: &str,
    ) -> Result<Option<Value>, StoreError> {
        self.check_available()?;
        let docs = self.docs.read().await;
        Ok(docs.get(&collection).and_then(|list| {
            list.iter()
                .find(|doc| doc.get(field).and_then(Value::as_str) == Some(value))
                .cloned()
        }))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }

    async fn close(&self) {}
}
