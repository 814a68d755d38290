use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A chat subscribed to prayer reminders for one city.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Registration {
    pub chat_id: i64,
    pub city: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Registration {
    /// Inserts or replaces the chat's city in a single statement.
    pub async fn upsert(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
        city: &str,
    ) -> Result<Self, sqlx::Error> {
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO registrations (chat_id, city, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(chat_id) DO UPDATE SET
                city = excluded.city,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(chat_id)
        .bind(city)
        .bind(&now)
        .bind(&now)
        .execute(pool)
        .await?;

        Self::find_by_chat_id(pool, chat_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    pub async fn find_by_chat_id(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Registration>(
            "SELECT chat_id, city, created_at, updated_at FROM registrations WHERE chat_id = ?"
        )
        .bind(chat_id)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_all(pool: &sqlx::SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Registration>(
            "SELECT chat_id, city, created_at, updated_at FROM registrations ORDER BY chat_id"
        )
        .fetch_all(pool)
        .await
    }

    /// Returns whether a row was removed.
    pub async fn delete(pool: &sqlx::SqlitePool, chat_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM registrations WHERE chat_id = ?")
            .bind(chat_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &sqlx::SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM registrations")
            .fetch_one(pool)
            .await
    }

    pub async fn count_by_city(pool: &sqlx::SqlitePool) -> Result<Vec<(String, i64)>, sqlx::Error> {
        sqlx::query_as::<_, (String, i64)>(
            "SELECT city, COUNT(*) FROM registrations GROUP BY city ORDER BY city"
        )
        .fetch_all(pool)
        .await
    }
}
