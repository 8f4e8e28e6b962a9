// src/db/room_details.rs
use crate::db::room_changes::parse_col;
use crate::domain::room::{RoomDetails, RoomInput};
use crate::errors::ServerError;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};

const SELECT_ROOM: &str = "SELECT id, hostel_name, room_number, room_type, capacity, occupied, \
                           floor, created_at FROM room_details";

fn map_room(row: &Row<'_>) -> rusqlite::Result<RoomDetails> {
    Ok(RoomDetails {
        id: row.get(0)?,
        hostel_name: row.get(1)?,
        room_number: row.get(2)?,
        room_type: parse_col(row, 3)?,
        capacity: row.get(4)?,
        occupied: row.get(5)?,
        floor: row.get(6)?,
        created_at: row.get(7)?,
    })
}

/// Unique (hostel, room number) violations become a 409.
fn write_error(e: rusqlite::Error, input: &RoomInput) -> ServerError {
    match &e {
        rusqlite::Error::SqliteFailure(err, _) if err.code == ErrorCode::ConstraintViolation => {
            ServerError::Conflict(format!(
                "room {} already exists in {}",
                input.room_number.trim(),
                input.hostel_name.trim()
            ))
        }
        _ => ServerError::DbError(format!("write room failed: {e}")),
    }
}

pub fn list_rooms(conn: &Connection) -> Result<Vec<RoomDetails>, ServerError> {
    let mut stmt = conn
        .prepare(&format!("{SELECT_ROOM} ORDER BY hostel_name, room_number"))
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], map_room)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut rooms = Vec::new();
    for r in rows {
        rooms.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(rooms)
}

pub fn get_room(conn: &Connection, id: i64) -> Result<Option<RoomDetails>, ServerError> {
    conn.query_row(&format!("{SELECT_ROOM} WHERE id = ?"), params![id], map_room)
        .optional()
        .map_err(|e| ServerError::DbError(format!("load room failed: {e}")))
}

pub fn insert_room(
    conn: &Connection,
    input: &RoomInput,
    now: DateTime<Utc>,
) -> Result<RoomDetails, ServerError> {
    conn.execute(
        r#"
        INSERT INTO room_details (hostel_name, room_number, room_type, capacity, occupied, floor, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#,
        params![
            input.hostel_name.trim(),
            input.room_number.trim(),
            input.room_type.as_str(),
            input.capacity,
            input.occupied,
            input.floor,
            now
        ],
    )
    .map_err(|e| write_error(e, input))?;

    let id = conn.last_insert_rowid();
    get_room(conn, id)?.ok_or(ServerError::InternalError)
}

pub fn update_room(
    conn: &Connection,
    id: i64,
    input: &RoomInput,
) -> Result<RoomDetails, ServerError> {
    let updated = conn
        .execute(
            r#"
            UPDATE room_details
            SET hostel_name = ?1, room_number = ?2, room_type = ?3,
                capacity = ?4, occupied = ?5, floor = ?6
            WHERE id = ?7
            "#,
            params![
                input.hostel_name.trim(),
                input.room_number.trim(),
                input.room_type.as_str(),
                input.capacity,
                input.occupied,
                input.floor,
                id
            ],
        )
        .map_err(|e| write_error(e, input))?;

    if updated == 0 {
        return Err(ServerError::NotFound(format!("room {id}")));
    }
    get_room(conn, id)?.ok_or_else(|| ServerError::NotFound(format!("room {id}")))
}

pub fn delete_room(conn: &Connection, id: i64) -> Result<bool, ServerError> {
    let deleted = conn
        .execute("DELETE FROM room_details WHERE id = ?", params![id])
        .map_err(|e| ServerError::DbError(format!("delete room failed: {e}")))?;
    Ok(deleted > 0)
}
