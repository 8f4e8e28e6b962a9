use crate::client::{call, to_body, ClientError, Method, Transport};
use crate::domain::request::{RoomChangeForm, RoomChangeRequest};
use crate::domain::request_code::build_request_code;
use crate::domain::validation::{self, fields, ValidationErrors};
use chrono::Utc;

/// What a successful submission hands back.
#[derive(Debug, Clone)]
pub struct Submitted {
    /// Backend-assigned key.
    pub id: i64,
    /// Display code shown to the requester.
    pub request_code: String,
    pub request: RoomChangeRequest,
}

pub struct SubmissionClient<T> {
    transport: T,
}

impl<T: Transport> SubmissionClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Validate, stamp a display code and send the form. Invalid forms
    /// never reach the backend. One attempt, no retry.
    pub fn submit(&self, form: &RoomChangeForm) -> Result<Submitted, ClientError> {
        validation::validate(form).into_result()?;

        let gender = form
            .requester
            .gender()
            .ok_or_else(|| ValidationErrors::single(fields::GENDER, "Gender is required"))?;
        let code = build_request_code(form.requester.kind(), gender, Utc::now().timestamp_millis());

        let mut payload = form.clone();
        payload.request_code = Some(code);

        let request: RoomChangeRequest =
            call(&self.transport, Method::Post, "roomchange", Some(&to_body(&payload)?))?;

        tracing::info!(
            id = request.id,
            code = %request.request_code,
            "room change request submitted"
        );
        Ok(Submitted {
            id: request.id,
            request_code: request.request_code.clone(),
            request,
        })
    }
}
