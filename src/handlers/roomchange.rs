// src/handlers/roomchange.rs
use crate::db::{comments, room_changes, Database};
use crate::domain::request::{NewComment, RoomChangeForm};
use crate::domain::request_code::build_request_code;
use crate::domain::transitions::ReviewAction;
use crate::domain::validation::{self, fields, ValidationErrors};
use crate::errors::ServerError;
use crate::handlers::read_json;
use crate::responses::{json_response, message_response, ResultResp};
use astra::Request;
use chrono::Utc;
use serde::Deserialize;

const DEFAULT_COMMENT_AUTHOR: &str = "Admin";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApproveBody {
    message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RejectBody {
    reason: String,
}

pub fn list(db: &Database) -> ResultResp {
    let requests = db.with_conn(|conn| room_changes::list_requests(conn))?;
    json_response(200, &requests)
}

pub fn create(req: Request, db: &Database) -> ResultResp {
    let form: RoomChangeForm = read_json(req)?;
    validation::validate(&form).into_result()?;

    let now = Utc::now();
    let gender = form
        .requester
        .gender()
        .ok_or_else(|| ValidationErrors::single(fields::GENDER, "Gender is required"))?;
    let request_code = form
        .request_code
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| {
            build_request_code(form.requester.kind(), gender, now.timestamp_millis())
        });

    let created = db.with_conn(|conn| {
        let id = room_changes::insert_request(conn, &form, &request_code, now)?;
        room_changes::get_request(conn, id)?.ok_or(ServerError::InternalError)
    })?;

    tracing::info!(
        id = created.id,
        code = %created.request_code,
        requester = created.requester.kind().as_str(),
        "room change request created"
    );
    json_response(201, &created)
}

fn review(db: &Database, id: i64, action: ReviewAction, note: Option<&str>) -> ResultResp {
    let result =
        db.with_conn(|conn| room_changes::apply_review(conn, id, action, note, Utc::now()));

    match result {
        Ok(updated) => {
            tracing::info!(id, status = %updated.status, "room change request reviewed");
            json_response(200, &updated)
        }
        Err(err @ ServerError::Conflict(_)) => {
            tracing::warn!(id, %action, error = %err, "review refused");
            Err(err)
        }
        Err(err) => Err(err),
    }
}

pub fn approve(req: Request, db: &Database, id: i64) -> ResultResp {
    let body: ApproveBody = read_json(req)?;
    review(db, id, ReviewAction::Approve, body.message.as_deref())
}

pub fn reject(req: Request, db: &Database, id: i64) -> ResultResp {
    let body: RejectBody = read_json(req)?;
    if body.reason.trim().is_empty() {
        return Err(ServerError::BadRequest(
            "A rejection reason is required".to_string(),
        ));
    }
    review(db, id, ReviewAction::Reject, Some(body.reason.trim()))
}

pub fn delete(db: &Database, id: i64) -> ResultResp {
    let deleted = db.with_conn(|conn| room_changes::delete_request(conn, id))?;
    if !deleted {
        return Err(ServerError::NotFound(format!("room change request {id}")));
    }

    tracing::info!(id, "room change request deleted");
    message_response("Room change request deleted")
}

pub fn list_comments(db: &Database, id: i64) -> ResultResp {
    let thread = db.with_conn(|conn| {
        if room_changes::get_request(conn, id)?.is_none() {
            return Err(ServerError::NotFound(format!("room change request {id}")));
        }
        comments::list_comments(conn, id)
    })?;
    json_response(200, &thread)
}

pub fn add_comment(req: Request, db: &Database) -> ResultResp {
    let body: NewComment = read_json(req)?;

    let text = body.comment.trim();
    if text.is_empty() {
        return Err(ServerError::BadRequest("Comment cannot be empty".to_string()));
    }
    let author = match body.commented_by.trim() {
        "" => DEFAULT_COMMENT_AUTHOR,
        author => author,
    };

    let comment = db.with_conn(|conn| {
        comments::insert_comment(conn, body.request_id, author, text, Utc::now())
    })?;

    tracing::info!(request_id = body.request_id, author, "comment added");
    json_response(201, &comment)
}
