// src/domain/request.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raised when a stored or submitted string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    pub fn letter(self) -> char {
        match self {
            Gender::Male => 'M',
            Gender::Female => 'F',
        }
    }
}

impl FromStr for Gender {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            other => Err(ParseEnumError::new("gender", other)),
        }
    }
}

/// The requester category without any attached data. Used for filtering,
/// storage and the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequesterKind {
    StudentMale,
    StudentFemale,
    Staff,
}

impl RequesterKind {
    pub const ALL: [RequesterKind; 3] = [
        RequesterKind::StudentMale,
        RequesterKind::StudentFemale,
        RequesterKind::Staff,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RequesterKind::StudentMale => "student-male",
            RequesterKind::StudentFemale => "student-female",
            RequesterKind::Staff => "staff",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RequesterKind::StudentMale => "Male student",
            RequesterKind::StudentFemale => "Female student",
            RequesterKind::Staff => "Staff",
        }
    }
}

impl FromStr for RequesterKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student-male" => Ok(RequesterKind::StudentMale),
            "student-female" => Ok(RequesterKind::StudentFemale),
            "staff" => Ok(RequesterKind::Staff),
            other => Err(ParseEnumError::new("requester type", other)),
        }
    }
}

/// Who is filing the request.
///
/// Students carry their gender in the variant itself, so it can never be
/// set independently. Staff choose it explicitly; a form that has not picked
/// one yet holds `None` and fails validation.
///
/// On the wire this is two top-level keys, `requesterType` and `gender`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RequesterWire", into = "RequesterWire")]
pub enum RequesterType {
    StudentMale,
    StudentFemale,
    Staff { gender: Option<Gender> },
}

impl RequesterType {
    pub fn kind(&self) -> RequesterKind {
        match self {
            RequesterType::StudentMale => RequesterKind::StudentMale,
            RequesterType::StudentFemale => RequesterKind::StudentFemale,
            RequesterType::Staff { .. } => RequesterKind::Staff,
        }
    }

    pub fn gender(&self) -> Option<Gender> {
        match self {
            RequesterType::StudentMale => Some(Gender::Male),
            RequesterType::StudentFemale => Some(Gender::Female),
            RequesterType::Staff { gender } => *gender,
        }
    }

    pub fn is_staff(&self) -> bool {
        matches!(self, RequesterType::Staff { .. })
    }

    /// Room types this requester may hold or ask for.
    pub fn allowed_room_types(&self) -> &'static [RoomType] {
        match self {
            RequesterType::StudentMale | RequesterType::StudentFemale => &STUDENT_ROOM_TYPES,
            RequesterType::Staff { .. } => &STAFF_ROOM_TYPES,
        }
    }

    pub fn allows_room_type(&self, room_type: RoomType) -> bool {
        self.allowed_room_types().contains(&room_type)
    }

    /// Rebuild from stored columns. A student's stored gender is ignored.
    pub fn from_parts(kind: RequesterKind, gender: Option<Gender>) -> Self {
        match kind {
            RequesterKind::StudentMale => RequesterType::StudentMale,
            RequesterKind::StudentFemale => RequesterType::StudentFemale,
            RequesterKind::Staff => RequesterType::Staff { gender },
        }
    }
}

impl Default for RequesterType {
    fn default() -> Self {
        RequesterType::StudentMale
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RequesterWire {
    requester_type: RequesterKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gender: Option<Gender>,
}

impl From<RequesterWire> for RequesterType {
    fn from(wire: RequesterWire) -> Self {
        RequesterType::from_parts(wire.requester_type, wire.gender)
    }
}

impl From<RequesterType> for RequesterWire {
    fn from(requester: RequesterType) -> Self {
        RequesterWire {
            requester_type: requester.kind(),
            gender: requester.gender(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Single,
    Shared,
    Dormitory,
    #[serde(rename = "AC")]
    Ac,
    #[serde(rename = "Non-AC")]
    NonAc,
    Family,
}

pub const STUDENT_ROOM_TYPES: [RoomType; 3] =
    [RoomType::Single, RoomType::Shared, RoomType::Dormitory];

pub const STAFF_ROOM_TYPES: [RoomType; 5] = [
    RoomType::Single,
    RoomType::Shared,
    RoomType::Ac,
    RoomType::NonAc,
    RoomType::Family,
];

impl RoomType {
    pub fn as_str(self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Shared => "Shared",
            RoomType::Dormitory => "Dormitory",
            RoomType::Ac => "AC",
            RoomType::NonAc => "Non-AC",
            RoomType::Family => "Family",
        }
    }
}

impl FromStr for RoomType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Single" => Ok(RoomType::Single),
            "Shared" => Ok(RoomType::Shared),
            "Dormitory" => Ok(RoomType::Dormitory),
            "AC" => Ok(RoomType::Ac),
            "Non-AC" => Ok(RoomType::NonAc),
            "Family" => Ok(RoomType::Family),
            other => Err(ParseEnumError::new("room type", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reason {
    #[serde(rename = "Noise issues")]
    NoiseIssues,
    #[serde(rename = "Health reasons")]
    HealthReasons,
    #[serde(rename = "Roommate issues")]
    RoommateIssues,
    #[serde(rename = "Distance to classes")]
    DistanceToClasses,
    #[serde(rename = "Safety reasons")]
    SafetyReasons,
    #[serde(rename = "Family accommodation")]
    FamilyAccommodation,
    Other,
}

impl Reason {
    pub fn as_str(self) -> &'static str {
        match self {
            Reason::NoiseIssues => "Noise issues",
            Reason::HealthReasons => "Health reasons",
            Reason::RoommateIssues => "Roommate issues",
            Reason::DistanceToClasses => "Distance to classes",
            Reason::SafetyReasons => "Safety reasons",
            Reason::FamilyAccommodation => "Family accommodation",
            Reason::Other => "Other",
        }
    }
}

impl FromStr for Reason {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Noise issues" => Ok(Reason::NoiseIssues),
            "Health reasons" => Ok(Reason::HealthReasons),
            "Roommate issues" => Ok(Reason::RoommateIssues),
            "Distance to classes" => Ok(Reason::DistanceToClasses),
            "Safety reasons" => Ok(Reason::SafetyReasons),
            "Family accommodation" => Ok(Reason::FamilyAccommodation),
            "Other" => Ok(Reason::Other),
            other => Err(ParseEnumError::new("reason", other)),
        }
    }
}

/// Informational only, never gates a transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    Normal,
    Urgent,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Normal => "Normal",
            Priority::Urgent => "Urgent",
        }
    }
}

impl FromStr for Priority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Normal" => Ok(Priority::Normal),
            "Urgent" => Ok(Priority::Urgent),
            other => Err(ParseEnumError::new("priority", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Approved => "Approved",
            Status::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Status::Pending),
            "Approved" => Ok(Status::Approved),
            "Rejected" => Ok(Status::Rejected),
            other => Err(ParseEnumError::new("status", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Identity {
    /// Registration number for students, staff number for staff.
    pub registration_or_staff_id: String,
    pub full_name: String,
    pub national_id: String,
    pub contact: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffDetails {
    pub staff_id: String,
    pub department: String,
    pub designation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentRoom {
    pub hostel_name: String,
    pub room_number: String,
    pub room_type: Option<RoomType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestedRoom {
    pub hostel_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    pub room_type: Option<RoomType>,
}

/// A room-change request as it is being filled in. Every field may still be
/// missing; `validation::validate` decides whether it can be submitted.
/// This is also the body of `POST /roomchange`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomChangeForm {
    #[serde(flatten)]
    pub requester: RequesterType,
    #[serde(default)]
    pub identity: Identity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_details: Option<StaffDetails>,
    #[serde(default)]
    pub current_room: CurrentRoom,
    #[serde(default)]
    pub requested_room: RequestedRoom,
    #[serde(default)]
    pub reason: Option<Reason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_reason_text: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub agreement_accepted: bool,
    /// Display code built by the submission client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_code: Option<String>,
}

impl RoomChangeForm {
    pub fn new(requester: RequesterType) -> Self {
        Self {
            requester,
            staff_details: requester.is_staff().then(StaffDetails::default),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub request_id: i64,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /roomchange/comment`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub request_id: i64,
    pub comment: String,
    pub commented_by: String,
}

/// A stored request as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomChangeRequest {
    /// Backend-assigned identifier, the only key used for lookups.
    pub id: i64,
    /// Human-readable code built by the client, display only.
    pub request_code: String,
    #[serde(flatten)]
    pub requester: RequesterType,
    pub identity: Identity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_details: Option<StaffDetails>,
    pub current_room: CurrentRoom,
    pub requested_room: RequestedRoom,
    pub reason: Reason,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_reason_text: Option<String>,
    pub priority: Priority,
    pub agreement_accepted: bool,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn student_gender_is_fixed_by_requester_type() {
        assert_eq!(RequesterType::StudentMale.gender(), Some(Gender::Male));
        assert_eq!(RequesterType::StudentFemale.gender(), Some(Gender::Female));
        assert_eq!(RequesterType::Staff { gender: None }.gender(), None);
    }

    #[test]
    fn wire_gender_is_ignored_for_students() {
        let form: RoomChangeForm = serde_json::from_value(json!({
            "requesterType": "student-female",
            "gender": "Male"
        }))
        .unwrap();

        assert_eq!(form.requester, RequesterType::StudentFemale);
        assert_eq!(form.requester.gender(), Some(Gender::Female));
    }

    #[test]
    fn staff_gender_comes_from_the_wire() {
        let form: RoomChangeForm = serde_json::from_value(json!({
            "requesterType": "staff",
            "gender": "Female",
            "staffDetails": { "staffId": "ST-9", "department": "Physics", "designation": "Lecturer" }
        }))
        .unwrap();

        assert_eq!(
            form.requester,
            RequesterType::Staff {
                gender: Some(Gender::Female)
            }
        );
        assert_eq!(form.staff_details.unwrap().department, "Physics");
    }

    #[test]
    fn requester_serializes_as_top_level_keys() {
        let form = RoomChangeForm::new(RequesterType::StudentMale);
        let value = serde_json::to_value(&form).unwrap();

        assert_eq!(value["requesterType"], "student-male");
        assert_eq!(value["gender"], "Male");
    }

    #[test]
    fn room_type_allowance_depends_on_requester() {
        let staff = RequesterType::Staff {
            gender: Some(Gender::Male),
        };
        assert!(RequesterType::StudentMale.allows_room_type(RoomType::Dormitory));
        assert!(!RequesterType::StudentMale.allows_room_type(RoomType::Family));
        assert!(staff.allows_room_type(RoomType::NonAc));
        assert!(!staff.allows_room_type(RoomType::Dormitory));
    }

    #[test]
    fn enum_strings_match_the_wire_names() {
        assert_eq!(
            serde_json::to_value(RoomType::NonAc).unwrap(),
            json!(RoomType::NonAc.as_str())
        );
        assert_eq!(
            serde_json::to_value(Reason::DistanceToClasses).unwrap(),
            json!("Distance to classes")
        );
        assert_eq!("Urgent".parse::<Priority>().unwrap(), Priority::Urgent);
        assert!("Closed".parse::<Status>().is_err());
    }
}
