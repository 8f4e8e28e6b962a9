use crate::db::Database;
use crate::errors::ServerError;
use crate::handlers::{admin, parse_id, preferences, roomchange, roomdetails};
use crate::responses::{json_error_response, ResultResp};
use crate::templates;
use astra::{Request, Response};

pub fn handle(req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        // Room change requests
        ("GET", ["roomchange", "display"]) => roomchange::list(db),
        ("POST", ["roomchange"]) => roomchange::create(req, db),
        ("PUT", ["roomchange", "approve", id]) => roomchange::approve(req, db, parse_id(id)?),
        ("PUT", ["roomchange", "reject", id]) => roomchange::reject(req, db, parse_id(id)?),
        ("DELETE", ["roomchange", "delete", id]) => roomchange::delete(db, parse_id(id)?),
        ("GET", ["roomchange", "comment", id]) => roomchange::list_comments(db, parse_id(id)?),
        ("POST", ["roomchange", "comment"]) => roomchange::add_comment(req, db),

        // Room inventory
        ("GET", ["roomdetails", "display"]) => roomdetails::list(db),
        ("POST", ["roomdetails", "add"]) => roomdetails::add(req, db),
        ("PUT", ["roomdetails", "update", id]) => roomdetails::update(req, db, parse_id(id)?),
        ("DELETE", ["roomdetails", "delete", id]) => roomdetails::delete(db, parse_id(id)?),

        // Review dashboard
        ("GET", ["admin", "roomchange"]) => admin::review(&req, db),
        ("GET", ["admin", "roomchange", "export"]) => admin::export(&req, db),

        ("GET", ["preferences", "theme"]) => preferences::get_theme(db),
        ("PUT", ["preferences", "theme"]) => preferences::set_theme(req, db),

        _ => Err(ServerError::NotFound(format!("no route for {method} {path}"))),
    }
}

/// Entry point for the server loop: errors become JSON bodies for API
/// routes and HTML pages for the admin screens.
pub fn respond(req: Request, db: &Database) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let wants_html = path.starts_with("/admin");

    match handle(req, db) {
        Ok(resp) => {
            tracing::debug!(%method, %path, status = resp.status().as_u16(), "request served");
            resp
        }
        Err(err) => {
            if err.status_code() >= 500 {
                tracing::error!(%method, %path, error = %err, "request failed");
            } else {
                tracing::debug!(%method, %path, error = %err, "request refused");
            }

            if wants_html {
                templates::html_error_response(&err)
            } else {
                json_error_response(&err)
            }
        }
    }
}
