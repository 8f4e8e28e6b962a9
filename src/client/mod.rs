mod client_error;
mod dashboard;
mod room_details;
mod submission;
mod transport;

pub use client_error::ClientError;
pub use dashboard::ReviewDashboard;
pub use room_details::RoomDetailsClient;
pub use submission::{Submitted, SubmissionClient};
pub use transport::{ApiResponse, HttpTransport, Method, Transport};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

/// One backend round trip. Non-2xx answers surface the backend's `message`
/// verbatim, or a generic line naming the status when there is none.
fn call<T, R>(
    transport: &T,
    method: Method,
    path: &str,
    body: Option<&Value>,
) -> Result<R, ClientError>
where
    T: Transport + ?Sized,
    R: DeserializeOwned,
{
    let resp = transport.send(method, path, body)?;

    if !resp.is_success() {
        let message = serde_json::from_slice::<ErrorBody>(&resp.body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status {}", resp.status));
        return Err(ClientError::Backend {
            status: resp.status,
            message,
        });
    }

    serde_json::from_slice(&resp.body).map_err(|e| ClientError::Decode(e.to_string()))
}

fn to_body<S: serde::Serialize>(value: &S) -> Result<Value, ClientError> {
    serde_json::to_value(value).map_err(|e| ClientError::Decode(e.to_string()))
}
