//! SQLite persistence for RSVP records.
//!
//! One table, append-only. Records are never updated or deleted; the admin
//! listing reads them back in insertion order.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    FromRow,
};
use tracing::info;

pub type DbPool = SqlitePool;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS rsvps (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL,
  dinner_confirmed BOOLEAN NOT NULL,
  party_confirmed BOOLEAN,
  timestamp DATETIME NOT NULL
);
"#;

/// A stored RSVP row. `party_confirmed` is `None` when the guest left the
/// question unanswered.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Rsvp {
    pub id: i64,
    pub name: String,
    pub dinner_confirmed: bool,
    pub party_confirmed: Option<bool>,
    pub timestamp: DateTime<Utc>,
}

/// Insert input. The id comes from the store, never from the caller.
#[derive(Debug, Clone)]
pub struct NewRsvp {
    pub name: String,
    pub dinner_confirmed: bool,
    pub party_confirmed: Option<bool>,
    pub timestamp: DateTime<Utc>,
}

pub async fn init_db(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    ensure_schema(&pool).await?;
    info!("Database schema ready");

    Ok(pool)
}

pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(SCHEMA).execute(pool).await?;

    Ok(())
}

pub async fn insert_rsvp(pool: &DbPool, rsvp: &NewRsvp) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO rsvps (name, dinner_confirmed, party_confirmed, timestamp)
         VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(&rsvp.name)
    .bind(rsvp.dinner_confirmed)
    .bind(rsvp.party_confirmed)
    .bind(rsvp.timestamp)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn list_rsvps(pool: &DbPool) -> Result<Vec<Rsvp>, sqlx::Error> {
    sqlx::query_as::<_, Rsvp>(
        "SELECT id, name, dinner_confirmed, party_confirmed, timestamp
         FROM rsvps
         ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_pool() -> DbPool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        ensure_schema(&pool).await.unwrap();
        pool
    }

    fn guest(name: &str) -> NewRsvp {
        NewRsvp {
            name: name.to_string(),
            dinner_confirmed: true,
            party_confirmed: Some(false),
            timestamp: Utc::now(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let pool = memory_pool().await;

        let first = insert_rsvp(&pool, &guest("Ana")).await.unwrap();
        let second = insert_rsvp(&pool, &guest("Ana")).await.unwrap();

        assert!(second > first);
    }

    #[tokio::test]
    async fn list_returns_records_in_insertion_order() {
        let pool = memory_pool().await;

        insert_rsvp(&pool, &guest("first")).await.unwrap();
        insert_rsvp(&pool, &guest("second")).await.unwrap();
        insert_rsvp(&pool, &guest("third")).await.unwrap();

        let names: Vec<String> = list_rsvps(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();

        assert_eq!(names, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn unanswered_party_question_is_stored_as_null() {
        let pool = memory_pool().await;

        let mut rsvp = guest("Ana");
        rsvp.party_confirmed = None;
        insert_rsvp(&pool, &rsvp).await.unwrap();

        let stored = list_rsvps(&pool).await.unwrap();
        assert_eq!(stored[0].party_confirmed, None);
        assert!(stored[0].dinner_confirmed);
    }

    #[tokio::test]
    async fn schema_creation_is_idempotent() {
        let pool = memory_pool().await;

        insert_rsvp(&pool, &guest("Ana")).await.unwrap();
        ensure_schema(&pool).await.unwrap();

        assert_eq!(list_rsvps(&pool).await.unwrap().len(), 1);
    }
}
