// src/domain/room.rs

use crate::domain::request::RoomType;
use crate::domain::validation::ValidationErrors;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A room in the hostel inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetails {
    pub id: i64,
    pub hostel_name: String,
    pub room_number: String,
    pub room_type: RoomType,
    pub capacity: i64,
    pub occupied: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RoomDetails {
    pub fn available_beds(&self) -> i64 {
        (self.capacity - self.occupied).max(0)
    }
}

/// Body of `POST /roomdetails/add` and `PUT /roomdetails/update/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomInput {
    pub hostel_name: String,
    pub room_number: String,
    pub room_type: RoomType,
    pub capacity: i64,
    #[serde(default)]
    pub occupied: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
}

impl RoomInput {
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if self.hostel_name.trim().is_empty() {
            errors.push("hostelName", "Hostel name is required");
        }
        if self.room_number.trim().is_empty() {
            errors.push("roomNumber", "Room number is required");
        }
        if self.capacity < 1 {
            errors.push("capacity", "Capacity must be at least 1");
        }
        if self.occupied < 0 || self.occupied > self.capacity {
            errors.push("occupied", "Occupied beds must be between 0 and capacity");
        }
        errors
    }
}
