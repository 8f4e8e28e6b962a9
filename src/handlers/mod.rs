pub mod admin;
pub mod preferences;
pub mod roomchange;
pub mod roomdetails;

use crate::errors::ServerError;
use astra::Request;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::io::Read;

/// Decode a JSON request body. An empty body reads as `{}` so that
/// endpoints whose fields are all optional accept a bare request.
pub fn read_json<T: DeserializeOwned>(req: Request) -> Result<T, ServerError> {
    let mut body = Vec::new();
    req.into_body()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("could not read request body: {e}")))?;

    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        &body
    };

    serde_json::from_slice(body)
        .map_err(|e| ServerError::BadRequest(format!("invalid JSON body: {e}")))
}

/// Percent-decoded query parameters; the last occurrence of a key wins.
pub fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

pub fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse()
        .map_err(|_| ServerError::BadRequest(format!("invalid id '{raw}'")))
}
