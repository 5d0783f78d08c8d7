// src/db/store.rs
//
// Document storage on Postgres.
//
// Every record kind lives in the single `documents` table, partitioned by the
// `collection` column. Documents are opaque JSON; `seq` is assigned by Postgres
// and fixes the insertion order used when listing a collection.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::db::{Collection, DbPool};
use crate::timestamp::TimestampError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("timestamp error: {0}")]
    Timestamp(#[from] TimestampError),

    #[error("malformed document in {collection}: {reason}")]
    Malformed {
        collection: &'static str,
        reason: String,
    },
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Append one document to a collection.
    async fn insert_one(&self, collection: Collection, doc: Value) -> Result<(), StoreError>;

    /// Documents of a collection in insertion order, at most `limit` of them.
    async fn find(&self, collection: Collection, limit: i64) -> Result<Vec<Value>, StoreError>;

    /// First document whose top-level `field` equals `value` exactly.
    async fn find_one(
        &self,
        collection: Collection,
        field: &str,
        value: &str,
    ) -> Result<Option<Value>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;

    /// Release the underlying connections. Called once at shutdown.
    async fn close(&self);
}

/// Convenient type alias for dyn store.
pub type DynDocumentStore = Arc<dyn DocumentStore>;

#[derive(Clone)]
pub struct PgDocumentStore {
    pool: DbPool,
}

impl PgDocumentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create the `documents` table and its ordering index if missing.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                seq         BIGSERIAL PRIMARY KEY,
                collection  TEXT NOT NULL,
                data        JSONB NOT NULL,
                inserted_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS documents_collection_seq_idx
                ON documents (collection, seq)
            "#,
        )
        .execute(&self.pool)
        .await?;

        info!("Document schema ready");
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert_one(&self, collection: Collection, doc: Value) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO documents (collection, data)
            VALUES ($1, $2)
            "#,
        )
        .bind(collection.as_str())
        .bind(doc)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, collection: Collection, limit: i64) -> Result<Vec<Value>, StoreError> {
        let docs = sqlx::query_scalar::<_, Value>(
            r#"
            SELECT data
            FROM documents
            WHERE collection = $1
            ORDER BY seq
            LIMIT $2
            "#,
        )
        .bind(collection.as_str())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(docs)
    }

    async fn find_one(
        &self,
        collection: Collection,
        field: &str,
        value: &str,
    ) -> Result<Option<Value>, StoreError> {
        let doc = sqlx::query_scalar::<_, Value>(
            r#"
            SELECT data
            FROM documents
            WHERE collection = $1
              AND data ->> $2 = $3
            ORDER BY seq
            LIMIT 1
            "#,
        )
        .bind(collection.as_str())
        .bind(field)
        .bind(value)
        .fetch_optional(&self.pool)
        .await?;

        Ok(doc)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

// ----------------------------
// Tests
// ----------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sqlx::postgres::PgPoolOptions;
    use uuid::Uuid;

    /// Runs against a live Postgres named by DATABASE_URL, inside a throwaway
    /// schema: `cargo test -- --ignored`.
    #[tokio::test]
    #[ignore]
    async fn test_pg_store_order_limit_and_lookup() {
        let Ok(url) = std::env::var("DATABASE_URL") else {
            eprintln!("DATABASE_URL not set, skipping");
            return;
        };

        // One connection so the search_path below applies to every query.
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(&url)
            .await
            .unwrap();
        let schema = format!("docstore_test_{}", Uuid::new_v4().simple());
        sqlx::query(&format!("CREATE SCHEMA {}", schema))
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query(&format!("SET search_path TO {}", schema))
            .execute(&pool)
            .await
            .unwrap();

        let store = PgDocumentStore::new(pool.clone());
        store.ensure_schema().await.unwrap();
        store.ping().await.unwrap();

        for name in ["a", "b", "c"] {
            store
                .insert_one(Collection::StatusChecks, json!({ "client_name": name }))
                .await
                .unwrap();
        }
        store
            .insert_one(Collection::Newsletter, json!({ "email": "reader@example.com" }))
            .await
            .unwrap();

        let names: Vec<Value> = store
            .find(Collection::StatusChecks, 1000)
            .await
            .unwrap()
            .into_iter()
            .map(|doc| doc["client_name"].clone())
            .collect();
        assert_eq!(names, vec![json!("a"), json!("b"), json!("c")]);

        let capped = store.find(Collection::StatusChecks, 2).await.unwrap();
        assert_eq!(capped.len(), 2);
        assert_eq!(capped[1]["client_name"], "b");

        let hit = store
            .find_one(Collection::Newsletter, "email", "reader@example.com")
            .await
            .unwrap();
        assert!(hit.is_some());

        let miss = store
            .find_one(Collection::Newsletter, "email", "Reader@example.com")
            .await
            .unwrap();
        assert!(miss.is_none());

        // Same field in another collection does not match.
        let other = store
            .find_one(Collection::Contacts, "email", "reader@example.com")
            .await
            .unwrap();
        assert!(other.is_none());

        sqlx::query(&format!("DROP SCHEMA {} CASCADE", schema))
            .execute(&pool)
            .await
            .unwrap();
        store.close().await;
    }
}
