//! SQLite implementation of the passport store.
//!
//! Timestamps are stored as RFC 3339 TEXT with microsecond precision and
//! hashes as lowercase hex TEXT, matching the canonical encodings used for
//! hashing. The `device_id` PRIMARY KEY is the atomic uniqueness check for
//! minting.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, Row, SqlitePool};

use crate::crypto::canonical_timestamp;
use crate::domain::{DeviceId, EventType, Passport, PassportEvent};
use crate::infra::error::{PassportError, Result};
use crate::infra::traits::PassportStore;

/// SQLite-backed passport store.
#[derive(Clone)]
pub struct SqlitePassportStore {
    pool: SqlitePool,
}

impl SqlitePassportStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct PassportRow {
    device_id: String,
    minted_at: String,
    wipe_standard: String,
    is_certified: bool,
    chain_hash: String,
}

impl TryFrom<PassportRow> for Passport {
    type Error = PassportError;

    fn try_from(row: PassportRow) -> Result<Passport> {
        Ok(Passport {
            device_id: DeviceId::from(row.device_id),
            minted_at: parse_timestamp(&row.minted_at)?,
            wipe_standard: row.wipe_standard,
            is_certified: row.is_certified,
            chain_hash: parse_hash(&row.chain_hash)?,
        })
    }
}

#[derive(FromRow)]
struct EventRow {
    id: i64,
    device_id: String,
    event_type: String,
    event_data: String,
    timestamp: String,
}

impl TryFrom<EventRow> for PassportEvent {
    type Error = PassportError;

    fn try_from(row: EventRow) -> Result<PassportEvent> {
        Ok(PassportEvent {
            id: row.id,
            device_id: DeviceId::from(row.device_id),
            event_type: EventType::new(row.event_type),
            event_data: serde_json::from_str(&row.event_data)
                .map_err(|e| PassportError::Internal(format!("corrupt event data: {e}")))?,
            timestamp: parse_timestamp(&row.timestamp)?,
        })
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| PassportError::Internal(format!("corrupt timestamp {raw:?}: {e}")))
}

fn parse_hash(raw: &str) -> Result<[u8; 32]> {
    let bytes = hex::decode(raw)
        .map_err(|e| PassportError::Internal(format!("corrupt chain hash {raw:?}: {e}")))?;
    bytes
        .try_into()
        .map_err(|_| PassportError::Internal(format!("corrupt chain hash {raw:?}: wrong length")))
}

#[async_trait]
impl PassportStore for SqlitePassportStore {
    async fn insert(&self, passport: &Passport) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO passports (device_id, minted_at, wipe_standard, is_certified, chain_hash)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(passport.device_id.as_str())
        .bind(canonical_timestamp(&passport.minted_at))
        .bind(&passport.wipe_standard)
        .bind(passport.is_certified)
        .bind(hex::encode(passport.chain_hash))
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => {
                Err(PassportError::AlreadyMinted(passport.device_id.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn get(&self, device_id: &DeviceId) -> Result<Option<Passport>> {
        let row: Option<PassportRow> = sqlx::query_as(
            r#"
            SELECT device_id, minted_at, wipe_standard, is_certified, chain_hash
            FROM passports
            WHERE device_id = ?
            "#,
        )
        .bind(device_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Passport::try_from).transpose()
    }

    async fn exists(&self, device_id: &DeviceId) -> Result<bool> {
        let row = sqlx::query("SELECT 1 FROM passports WHERE device_id = ?")
            .bind(device_id.as_str())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    async fn list_events(&self, device_id: &DeviceId) -> Result<Vec<PassportEvent>> {
        let rows: Vec<EventRow> = sqlx::query_as(
            r#"
            SELECT id, device_id, event_type, event_data, timestamp
            FROM passport_events
            WHERE device_id = ?
            ORDER BY timestamp ASC, id ASC
            "#,
        )
        .bind(device_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(PassportEvent::try_from).collect()
    }

    async fn append_event(&self, event: &PassportEvent) -> Result<i64> {
        let event_data = serde_json::to_string(&event.event_data)
            .map_err(|e| PassportError::Internal(format!("unencodable event data: {e}")))?;

        let row = sqlx::query(
            r#"
            INSERT INTO passport_events (device_id, event_type, event_data, timestamp)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(event.device_id.as_str())
        .bind(event.event_type.as_str())
        .bind(event_data)
        .bind(canonical_timestamp(&event.timestamp))
        .fetch_one(&self.pool)
        .await?;

        Ok(row.get::<i64, _>("id"))
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}
