// src/db/mod.rs

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

pub mod store;

#[cfg(test)]
pub mod memory;

pub use store::{DocumentStore, DynDocumentStore, PgDocumentStore, StoreError};

pub type DbPool = PgPool;

/// Named partitions of the document store, one per record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    StatusChecks,
    Contacts,
    Newsletter,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::StatusChecks => "status_checks",
            Collection::Contacts => "contacts",
            Collection::Newsletter => "newsletter",
        }
    }
}

/// Connect to Postgres, selecting `database_name` regardless of what the URL names.
pub async fn create_pool(database_url: &str, database_name: &str) -> Result<DbPool, sqlx::Error> {
    let options = PgConnectOptions::from_str(database_url)?.database(database_name);

    PgPoolOptions::new().connect_with(options).await
}
