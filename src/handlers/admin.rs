// src/handlers/admin.rs
use crate::db::{preferences, room_changes, Database};
use crate::domain::filter::{RequestFilter, RequestSummary};
use crate::domain::request::RoomChangeRequest;
use crate::handlers::parse_query;
use crate::responses::{html_response, xlsx_response, ResultResp};
use crate::spreadsheets::export_requests_xlsx;
use crate::templates::pages::{review_page, ReviewVm};
use astra::Request;
use chrono::Utc;

fn load(db: &Database) -> Result<(Vec<RoomChangeRequest>, bool), crate::errors::ServerError> {
    db.with_conn(|conn| {
        let requests = room_changes::list_requests(conn)?;
        let dark_mode = preferences::dark_mode(conn)?;
        Ok((requests, dark_mode))
    })
}

pub fn review(req: &Request, db: &Database) -> ResultResp {
    let filter = RequestFilter::from_query(&parse_query(req));
    let (all, dark_mode) = load(db)?;

    let vm = ReviewVm {
        summary: RequestSummary::from_requests(&all),
        requests: filter.apply(&all).into_iter().cloned().collect(),
        filter,
        dark_mode,
    };

    html_response(review_page(&vm))
}

pub fn export(req: &Request, db: &Database) -> ResultResp {
    let filter = RequestFilter::from_query(&parse_query(req));
    let (all, _) = load(db)?;
    let visible = filter.apply(&all);

    let buffer = export_requests_xlsx(&visible)?;
    tracing::info!(rows = visible.len(), "room change export generated");

    let filename = format!("room_change_requests_{}.xlsx", Utc::now().format("%Y%m%d"));
    xlsx_response(buffer, &filename)
}
