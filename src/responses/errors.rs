use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use serde_json::json;

pub use crate::errors::ResultResp;

/// Convert a ServerError into a JSON error body:
/// `{"message": "...", "errors": {field: message}}`, `errors` only for
/// validation failures.
pub fn json_error_response(err: &ServerError) -> Response {
    let body = match err {
        ServerError::Validation(errors) => json!({
            "message": err.public_message(),
            "errors": errors,
        }),
        _ => json!({ "message": err.public_message() }),
    };

    ResponseBuilder::new()
        .status(err.status_code())
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body.to_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
