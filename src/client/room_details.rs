use crate::client::{call, to_body, ClientError, MessageBody, Method, Transport};
use crate::domain::room::{RoomDetails, RoomInput};

/// Room inventory calls (`/roomdetails/*`).
pub struct RoomDetailsClient<T> {
    transport: T,
}

impl<T: Transport> RoomDetailsClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn list(&self) -> Result<Vec<RoomDetails>, ClientError> {
        call(&self.transport, Method::Get, "roomdetails/display", None)
    }

    pub fn add(&self, input: &RoomInput) -> Result<RoomDetails, ClientError> {
        input.validate().into_result()?;
        call(&self.transport, Method::Post, "roomdetails/add", Some(&to_body(input)?))
    }

    pub fn update(&self, id: i64, input: &RoomInput) -> Result<RoomDetails, ClientError> {
        input.validate().into_result()?;
        let path = format!("roomdetails/update/{id}");
        call(&self.transport, Method::Put, &path, Some(&to_body(input)?))
    }

    pub fn delete(&self, id: i64) -> Result<String, ClientError> {
        let path = format!("roomdetails/delete/{id}");
        let reply: MessageBody = call(&self.transport, Method::Delete, &path, None)?;
        Ok(reply.message)
    }
}
