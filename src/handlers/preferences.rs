// src/handlers/preferences.rs
use crate::db::{preferences, Database};
use crate::handlers::read_json;
use crate::responses::{json_response, ResultResp};
use astra::Request;
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePreference {
    pub dark_mode: bool,
}

pub fn get_theme(db: &Database) -> ResultResp {
    let dark_mode = db.with_conn(|conn| preferences::dark_mode(conn))?;
    json_response(200, &ThemePreference { dark_mode })
}

pub fn set_theme(req: Request, db: &Database) -> ResultResp {
    let pref: ThemePreference = read_json(req)?;
    db.with_conn(|conn| preferences::set_dark_mode(conn, pref.dark_mode, Utc::now()))?;

    tracing::info!(dark_mode = pref.dark_mode, "theme preference stored");
    json_response(200, &pref)
}
