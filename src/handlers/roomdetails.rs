// src/handlers/roomdetails.rs
use crate::db::{room_details, Database};
use crate::domain::room::RoomInput;
use crate::errors::ServerError;
use crate::handlers::read_json;
use crate::responses::{json_response, message_response, ResultResp};
use astra::Request;
use chrono::Utc;

pub fn list(db: &Database) -> ResultResp {
    let rooms = db.with_conn(|conn| room_details::list_rooms(conn))?;
    json_response(200, &rooms)
}

pub fn add(req: Request, db: &Database) -> ResultResp {
    let input: RoomInput = read_json(req)?;
    input.validate().into_result()?;

    let room = db.with_conn(|conn| room_details::insert_room(conn, &input, Utc::now()))?;
    tracing::info!(
        id = room.id,
        hostel = %room.hostel_name,
        room = %room.room_number,
        "room added"
    );
    json_response(201, &room)
}

pub fn update(req: Request, db: &Database, id: i64) -> ResultResp {
    let input: RoomInput = read_json(req)?;
    input.validate().into_result()?;

    let room = db.with_conn(|conn| room_details::update_room(conn, id, &input))?;
    tracing::info!(id, "room updated");
    json_response(200, &room)
}

pub fn delete(db: &Database, id: i64) -> ResultResp {
    let deleted = db.with_conn(|conn| room_details::delete_room(conn, id))?;
    if !deleted {
        return Err(ServerError::NotFound(format!("room {id}")));
    }

    tracing::info!(id, "room deleted");
    message_response("Room deleted")
}
