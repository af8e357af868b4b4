//! Preferences storage for the conference companion.
//!
//! The only persisted state is a single [`UserPreferences`] record, stored as
//! JSON under a fixed key in a small `rusqlite` key/value table. The whole
//! record is rewritten on every change.
//!
//! # Thread Safety
//!
//! [`PreferencesStore`] wraps a `rusqlite::Connection`, which is `Send` but not
//! `Sync`. Wrap it in a `Mutex` to share it across threads.
//!
//! # Schema
//!
//! `kv_store(key TEXT PRIMARY KEY, value TEXT NOT NULL, updated_at TEXT NOT NULL)`
//!
//! `updated_at` is ISO 8601 in UTC (e.g., `2026-02-04T09:15:00.000Z`).

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use dtx_core::UserPreferences;
use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;

/// Storage key of the preferences record.
pub const PREFERENCES_KEY: &str = "dtx_prefs";

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An error from the underlying database.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// A stored record could not be parsed or does not match the schema.
    #[error("malformed record under {key}")]
    Malformed {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
    /// The record could not be serialized.
    #[error("failed to serialize record: {0}")]
    Serialize(#[source] serde_json::Error),
    /// Failed to parse a stored timestamp.
    #[error("invalid timestamp under {key}: {timestamp}")]
    TimestampParse {
        key: &'static str,
        timestamp: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Database connection wrapper holding the preferences record.
///
/// See the [module documentation](self) for thread safety considerations.
pub struct PreferencesStore {
    conn: Connection,
}

impl PreferencesStore {
    /// Opens a store at the given path, creating it if necessary.
    ///
    /// The parent directory must already exist.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.init()?;
        tracing::debug!(path = %path.display(), "opened preferences store");
        Ok(store)
    }

    /// Opens an in-memory store.
    ///
    /// Useful for testing. The data is destroyed when the connection closes.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init()?;
        Ok(store)
    }

    /// Initializes the schema. Idempotent.
    fn init(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            ",
        )?;
        Ok(())
    }

    /// Loads the preferences record.
    ///
    /// Returns `Ok(None)` on first run, when nothing has been saved yet, and
    /// [`StoreError::Malformed`] when a record exists but cannot be parsed.
    pub fn load(&self) -> Result<Option<UserPreferences>, StoreError> {
        let Some(raw) = self.raw_value(PREFERENCES_KEY)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Malformed {
                key: PREFERENCES_KEY,
                source,
            })
    }

    /// Loads the preferences record, substituting `default` when it is missing
    /// or malformed.
    ///
    /// Only database failures are returned as errors; a corrupt record is
    /// logged and treated as absent.
    pub fn load_or(&self, default: UserPreferences) -> Result<UserPreferences, StoreError> {
        match self.load() {
            Ok(Some(prefs)) => Ok(prefs),
            Ok(None) => {
                tracing::debug!("no stored preferences, using defaults");
                Ok(default)
            }
            Err(StoreError::Malformed { source, .. }) => {
                tracing::warn!(error = %source, "stored preferences are malformed, using defaults");
                Ok(default)
            }
            Err(e) => Err(e),
        }
    }

    /// Writes the whole preferences record, replacing any previous one.
    pub fn save(&self, prefs: &UserPreferences) -> Result<(), StoreError> {
        let json = serde_json::to_string(prefs).map_err(StoreError::Serialize)?;
        self.conn.execute(
            "
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
            params![PREFERENCES_KEY, json, format_timestamp(Utc::now())],
        )?;
        tracing::debug!(
            priorities = prefs.priorities.len(),
            saved = prefs.saved_sessions.len(),
            "saved preferences"
        );
        Ok(())
    }

    /// Removes the preferences record. Returns whether one existed.
    pub fn clear(&self) -> Result<bool, StoreError> {
        let removed = self
            .conn
            .execute("DELETE FROM kv_store WHERE key = ?1", params![PREFERENCES_KEY])?;
        Ok(removed > 0)
    }

    /// When the preferences record was last written, if ever.
    pub fn updated_at(&self) -> Result<Option<DateTime<Utc>>, StoreError> {
        let timestamp: Option<String> = self
            .conn
            .query_row(
                "SELECT updated_at FROM kv_store WHERE key = ?1",
                params![PREFERENCES_KEY],
                |row| row.get(0),
            )
            .optional()?;
        timestamp
            .map(|t| parse_timestamp(&t, PREFERENCES_KEY))
            .transpose()
    }

    fn raw_value(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }
}

fn parse_timestamp(timestamp: &str, key: &'static str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|source| StoreError::TimestampParse {
            key,
            timestamp: timestamp.to_string(),
            source,
        })
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}
