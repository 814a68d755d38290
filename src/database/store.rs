//! Registration storage shared by the update handlers and the reminder
//! dispatcher.

use std::collections::BTreeMap;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::catalog::City;
use crate::database::connection::DatabaseManager;
use crate::database::models::Registration;
use crate::utils::logging::{log_database_error, log_database_operation};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Chat id to city associations.
#[async_trait]
pub trait RegistrationStore: Send + Sync {
    async fn get(&self, chat_id: i64) -> Result<Option<City>, StoreError>;

    /// Replaces any previous city for the chat.
    async fn set(&self, chat_id: i64, city: City) -> Result<(), StoreError>;

    /// Returns `false` when the chat had no registration.
    async fn delete(&self, chat_id: i64) -> Result<bool, StoreError>;

    async fn list(&self) -> Result<Vec<(i64, City)>, StoreError>;

    /// Registrations the dispatcher would target.
    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.list().await?.len())
    }
}

/// SQLite-backed store; registrations survive restarts.
#[derive(Clone)]
pub struct SqliteRegistrationStore {
    db: DatabaseManager,
}

impl SqliteRegistrationStore {
    pub fn new(db: DatabaseManager) -> Self {
        Self { db }
    }

    fn decode(row: &Registration) -> Option<City> {
        match row.city.parse() {
            Ok(city) => Some(city),
            Err(e) => {
                tracing::warn!("Skipping registration for chat {}: {}", row.chat_id, e);
                None
            }
        }
    }
}

#[async_trait]
impl RegistrationStore for SqliteRegistrationStore {
    async fn get(&self, chat_id: i64) -> Result<Option<City>, StoreError> {
        let row = Registration::find_by_chat_id(&self.db.pool, chat_id).await?;
        Ok(row.as_ref().and_then(Self::decode))
    }

    async fn set(&self, chat_id: i64, city: City) -> Result<(), StoreError> {
        log_database_operation("UPSERT", "registrations", Some(&format!("{chat_id} -> {city}")));
        Registration::upsert(&self.db.pool, chat_id, city.key())
            .await
            .map_err(|e| {
                log_database_error("UPSERT", "registrations", &e.to_string(), None);
                e
            })?;
        Ok(())
    }

    async fn delete(&self, chat_id: i64) -> Result<bool, StoreError> {
        log_database_operation("DELETE", "registrations", Some(&chat_id.to_string()));
        Ok(Registration::delete(&self.db.pool, chat_id).await?)
    }

    async fn list(&self) -> Result<Vec<(i64, City)>, StoreError> {
        let rows = Registration::find_all(&self.db.pool).await?;
        Ok(rows
            .iter()
            .filter_map(|row| Self::decode(row).map(|city| (row.chat_id, city)))
            .collect())
    }
}

/// Process-local store, lost on restart.
#[derive(Default)]
pub struct InMemoryRegistrationStore {
    entries: RwLock<BTreeMap<i64, City>>,
}

impl InMemoryRegistrationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RegistrationStore for InMemoryRegistrationStore {
    async fn get(&self, chat_id: i64) -> Result<Option<City>, StoreError> {
        Ok(self.entries.read().await.get(&chat_id).copied())
    }

    async fn set(&self, chat_id: i64, city: City) -> Result<(), StoreError> {
        self.entries.write().await.insert(chat_id, city);
        Ok(())
    }

    async fn delete(&self, chat_id: i64) -> Result<bool, StoreError> {
        Ok(self.entries.write().await.remove(&chat_id).is_some())
    }

    async fn list(&self) -> Result<Vec<(i64, City)>, StoreError> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .map(|(chat_id, city)| (*chat_id, *city))
            .collect())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.entries.read().await.len())
    }
}
