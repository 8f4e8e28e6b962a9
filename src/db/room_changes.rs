// src/db/room_changes.rs
use crate::db::comments;
use crate::domain::request::{
    CurrentRoom, Identity, RequestedRoom, RequesterType, RoomChangeForm, RoomChangeRequest,
    StaffDetails, Status,
};
use crate::domain::transitions::ReviewAction;
use crate::domain::ParseEnumError;
use crate::errors::ServerError;
use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};
use std::str::FromStr;

const SELECT_REQUEST: &str = r#"
    SELECT
        id,                     -- 0
        request_code,           -- 1
        requester_type,         -- 2
        gender,                 -- 3
        registration_id,        -- 4
        full_name,              -- 5
        national_id,            -- 6
        contact,                -- 7
        email,                  -- 8
        staff_id,               -- 9
        department,             -- 10
        designation,            -- 11
        current_hostel,         -- 12
        current_room_number,    -- 13
        current_room_type,      -- 14
        requested_hostel,       -- 15
        requested_room_number,  -- 16
        requested_room_type,    -- 17
        reason,                 -- 18
        other_reason_text,      -- 19
        priority,               -- 20
        agreement_accepted,     -- 21
        status,                 -- 22
        decision_message,       -- 23
        rejection_reason,       -- 24
        created_at              -- 25
    FROM room_change_requests
"#;

/// Read a text column holding one of the domain enums.
pub(crate) fn parse_col<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr<Err = ParseEnumError>,
{
    let raw: String = row.get(idx)?;
    raw.parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn map_request(row: &Row<'_>) -> rusqlite::Result<RoomChangeRequest> {
    let requester = RequesterType::from_parts(parse_col(row, 2)?, Some(parse_col(row, 3)?));

    let staff_details = if requester.is_staff() {
        Some(StaffDetails {
            staff_id: row.get::<_, Option<String>>(9)?.unwrap_or_default(),
            department: row.get::<_, Option<String>>(10)?.unwrap_or_default(),
            designation: row.get::<_, Option<String>>(11)?.unwrap_or_default(),
        })
    } else {
        None
    };

    Ok(RoomChangeRequest {
        id: row.get(0)?,
        request_code: row.get(1)?,
        requester,
        identity: Identity {
            registration_or_staff_id: row.get(4)?,
            full_name: row.get(5)?,
            national_id: row.get(6)?,
            contact: row.get(7)?,
            email: row.get(8)?,
        },
        staff_details,
        current_room: CurrentRoom {
            hostel_name: row.get(12)?,
            room_number: row.get(13)?,
            room_type: Some(parse_col(row, 14)?),
        },
        requested_room: RequestedRoom {
            hostel_name: row.get(15)?,
            room_number: row.get(16)?,
            room_type: Some(parse_col(row, 17)?),
        },
        reason: parse_col(row, 18)?,
        other_reason_text: row.get(19)?,
        priority: parse_col(row, 20)?,
        agreement_accepted: row.get(21)?,
        status: parse_col(row, 22)?,
        decision_message: row.get(23)?,
        rejection_reason: row.get(24)?,
        comments: Vec::new(),
        created_at: row.get(25)?,
    })
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, ServerError> {
    value.ok_or_else(|| ServerError::BadRequest(format!("missing {field}")))
}

fn trimmed_or_none(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Store a validated form and return the new row id.
pub fn insert_request(
    conn: &Connection,
    form: &RoomChangeForm,
    request_code: &str,
    now: DateTime<Utc>,
) -> Result<i64, ServerError> {
    let gender = required(form.requester.gender(), "gender")?;
    let current_type = required(form.current_room.room_type, "current room type")?;
    let requested_type = required(form.requested_room.room_type, "requested room type")?;
    let reason = required(form.reason, "reason")?;

    let staff = if form.requester.is_staff() {
        form.staff_details.clone()
    } else {
        None
    };
    let id = &form.identity;

    conn.execute(
        r#"
        INSERT INTO room_change_requests (
            request_code, requester_type, gender,
            registration_id, full_name, national_id, contact, email,
            staff_id, department, designation,
            current_hostel, current_room_number, current_room_type,
            requested_hostel, requested_room_number, requested_room_type,
            reason, other_reason_text, priority, agreement_accepted,
            status, created_at
        ) VALUES (
            ?1, ?2, ?3,
            ?4, ?5, ?6, ?7, ?8,
            ?9, ?10, ?11,
            ?12, ?13, ?14,
            ?15, ?16, ?17,
            ?18, ?19, ?20, ?21,
            ?22, ?23
        )
        "#,
        params![
            request_code,
            form.requester.kind().as_str(),
            gender.as_str(),
            id.registration_or_staff_id.trim(),
            id.full_name.trim(),
            id.national_id.trim(),
            id.contact.trim(),
            id.email.trim(),
            staff.as_ref().map(|s| s.staff_id.trim().to_string()),
            staff.as_ref().map(|s| s.department.trim().to_string()),
            staff.as_ref().map(|s| s.designation.trim().to_string()),
            form.current_room.hostel_name.trim(),
            form.current_room.room_number.trim(),
            current_type.as_str(),
            form.requested_room.hostel_name.trim(),
            trimmed_or_none(form.requested_room.room_number.as_deref()),
            requested_type.as_str(),
            reason.as_str(),
            trimmed_or_none(form.other_reason_text.as_deref()),
            form.priority.as_str(),
            form.agreement_accepted,
            Status::Pending.as_str(),
            now,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert room change failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}

/// One request with its comment thread.
pub fn get_request(conn: &Connection, id: i64) -> Result<Option<RoomChangeRequest>, ServerError> {
    let request = conn
        .query_row(&format!("{SELECT_REQUEST} WHERE id = ?"), params![id], map_request)
        .optional()
        .map_err(|e| ServerError::DbError(format!("load room change failed: {e}")))?;

    match request {
        Some(mut request) => {
            request.comments = comments::list_comments(conn, id)?;
            Ok(Some(request))
        }
        None => Ok(None),
    }
}

/// Every request, newest first, each with its comment thread.
pub fn list_requests(conn: &Connection) -> Result<Vec<RoomChangeRequest>, ServerError> {
    let mut stmt = conn
        .prepare(&format!("{SELECT_REQUEST} ORDER BY id DESC"))
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], map_request)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut threads = comments::list_all_comments(conn)?;
    let mut results = Vec::new();
    for row in rows {
        let mut request = row.map_err(|e| ServerError::DbError(e.to_string()))?;
        request.comments = threads.remove(&request.id).unwrap_or_default();
        results.push(request);
    }

    Ok(results)
}

/// Move a request out of `Pending`. The update is conditional on the stored
/// status and runs under the write lock, so of two racing reviews only one
/// can win and the other sees `Conflict`.
pub fn apply_review(
    conn: &mut Connection,
    id: i64,
    action: ReviewAction,
    note: Option<&str>,
    now: DateTime<Utc>,
) -> Result<RoomChangeRequest, ServerError> {
    // Take the write lock before reading the status; a deferred transaction
    // would fail with SQLITE_BUSY on lock upgrade instead of waiting.
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let stored: Option<Status> = tx
        .query_row(
            "SELECT status FROM room_change_requests WHERE id = ?",
            params![id],
            |row| parse_col(row, 0),
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("load status failed: {e}")))?;

    let current =
        stored.ok_or_else(|| ServerError::NotFound(format!("room change request {id}")))?;
    let next = current.transition(action)?;

    let note = trimmed_or_none(note);
    let (message, reason) = match action {
        ReviewAction::Approve => (note, None),
        ReviewAction::Reject => (None, note),
    };

    let updated = tx
        .execute(
            r#"
            UPDATE room_change_requests
            SET status = ?1,
                decision_message = ?2,
                rejection_reason = ?3,
                reviewed_at = ?4
            WHERE id = ?5 AND status = ?6
            "#,
            params![
                next.as_str(),
                message,
                reason,
                now,
                id,
                Status::Pending.as_str()
            ],
        )
        .map_err(|e| ServerError::DbError(format!("update status failed: {e}")))?;

    if updated == 0 {
        return Err(ServerError::Conflict(format!(
            "room change request {id} is no longer pending"
        )));
    }

    tx.commit()
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    get_request(conn, id)?
        .ok_or_else(|| ServerError::NotFound(format!("room change request {id}")))
}

/// Hard delete; comments go with it. Returns false when nothing matched.
pub fn delete_request(conn: &Connection, id: i64) -> Result<bool, ServerError> {
    let deleted = conn
        .execute(
            "DELETE FROM room_change_requests WHERE id = ?",
            params![id],
        )
        .map_err(|e| ServerError::DbError(format!("delete room change failed: {e}")))?;
    Ok(deleted > 0)
}
