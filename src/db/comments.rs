// src/db/comments.rs
use crate::domain::request::Comment;
use crate::errors::ServerError;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use std::collections::HashMap;

fn map_comment(row: &Row<'_>) -> rusqlite::Result<Comment> {
    Ok(Comment {
        id: row.get(0)?,
        request_id: row.get(1)?,
        author: row.get(2)?,
        text: row.get(3)?,
        created_at: row.get(4)?,
    })
}

/// Append a comment to a request's thread. Status is never touched.
pub fn insert_comment(
    conn: &Connection,
    request_id: i64,
    author: &str,
    text: &str,
    now: DateTime<Utc>,
) -> Result<Comment, ServerError> {
    let exists: i64 = conn
        .query_row(
            "select count(*) from room_change_requests where id = ?",
            params![request_id],
            |r| r.get(0),
        )
        .map_err(|e| ServerError::DbError(format!("lookup request failed: {e}")))?;
    if exists == 0 {
        return Err(ServerError::NotFound(format!(
            "room change request {request_id}"
        )));
    }

    conn.execute(
        "insert into room_change_comments (request_id, author, body, created_at) values (?, ?, ?, ?)",
        params![request_id, author, text, now],
    )
    .map_err(|e| ServerError::DbError(format!("insert comment failed: {e}")))?;

    Ok(Comment {
        id: conn.last_insert_rowid(),
        request_id,
        author: author.to_string(),
        text: text.to_string(),
        created_at: now,
    })
}

/// Oldest first.
pub fn list_comments(conn: &Connection, request_id: i64) -> Result<Vec<Comment>, ServerError> {
    let mut stmt = conn
        .prepare(
            "select id, request_id, author, body, created_at from room_change_comments where request_id = ? order by id",
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(params![request_id], map_comment)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}

/// Every thread keyed by request id, each oldest first.
pub fn list_all_comments(conn: &Connection) -> Result<HashMap<i64, Vec<Comment>>, ServerError> {
    let mut stmt = conn
        .prepare(
            "select id, request_id, author, body, created_at from room_change_comments order by id",
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], map_comment)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut threads: HashMap<i64, Vec<Comment>> = HashMap::new();
    for r in rows {
        let comment = r.map_err(|e| ServerError::DbError(e.to_string()))?;
        threads.entry(comment.request_id).or_default().push(comment);
    }
    Ok(threads)
}
