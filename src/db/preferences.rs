// src/db/preferences.rs
use crate::errors::ServerError;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

pub const DARK_MODE_KEY: &str = "theme.dark_mode";

pub fn get_preference(conn: &Connection, key: &str) -> Result<Option<String>, ServerError> {
    conn.query_row(
        "select value from preferences where key = ?",
        params![key],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("read preference failed: {e}")))
}

pub fn set_preference(
    conn: &Connection,
    key: &str,
    value: &str,
    now: DateTime<Utc>,
) -> Result<(), ServerError> {
    conn.execute(
        r#"
        insert into preferences (key, value, updated_at) values (?1, ?2, ?3)
        on conflict(key) do update set value = excluded.value, updated_at = excluded.updated_at
        "#,
        params![key, value, now],
    )
    .map_err(|e| ServerError::DbError(format!("write preference failed: {e}")))?;
    Ok(())
}

/// Off unless explicitly stored as on.
pub fn dark_mode(conn: &Connection) -> Result<bool, ServerError> {
    Ok(get_preference(conn, DARK_MODE_KEY)?.as_deref() == Some("true"))
}

pub fn set_dark_mode(
    conn: &Connection,
    enabled: bool,
    now: DateTime<Utc>,
) -> Result<(), ServerError> {
    set_preference(conn, DARK_MODE_KEY, if enabled { "true" } else { "false" }, now)
}
