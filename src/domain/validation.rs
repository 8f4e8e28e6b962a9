// src/domain/validation.rs

use crate::domain::request::{Reason, RoomChangeForm, RoomType};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Field names as they appear on the wire, used as error keys.
pub mod fields {
    pub const GENDER: &str = "gender";
    pub const REGISTRATION_OR_STAFF_ID: &str = "identity.registrationOrStaffId";
    pub const FULL_NAME: &str = "identity.fullName";
    pub const NATIONAL_ID: &str = "identity.nationalId";
    pub const CONTACT: &str = "identity.contact";
    pub const EMAIL: &str = "identity.email";
    pub const STAFF_ID: &str = "staffDetails.staffId";
    pub const DEPARTMENT: &str = "staffDetails.department";
    pub const DESIGNATION: &str = "staffDetails.designation";
    pub const CURRENT_HOSTEL: &str = "currentRoom.hostelName";
    pub const CURRENT_ROOM_NUMBER: &str = "currentRoom.roomNumber";
    pub const CURRENT_ROOM_TYPE: &str = "currentRoom.roomType";
    pub const REQUESTED_HOSTEL: &str = "requestedRoom.hostelName";
    pub const REQUESTED_ROOM_TYPE: &str = "requestedRoom.roomType";
    pub const REASON: &str = "reason";
    pub const OTHER_REASON_TEXT: &str = "otherReasonText";
    pub const AGREEMENT: &str = "agreementAccepted";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every violated rule, in the order the fields appear on the form.
/// Serializes as a `field -> message` map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The field the user should be taken to.
    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for e in &self.errors {
            map.serialize_entry(e.field, &e.message)?;
        }
        map.end()
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn require(errors: &mut ValidationErrors, field: &'static str, value: &str, label: &str) {
    if is_blank(value) {
        errors.push(field, format!("{label} is required"));
    }
}

/// Accepts `local@domain.tld`: no whitespace, exactly one `@`, and a domain
/// of at least two dot-separated labels, none of them empty.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

fn check_room_type(
    errors: &mut ValidationErrors,
    form: &RoomChangeForm,
    field: &'static str,
    room_type: Option<RoomType>,
    label: &str,
) {
    match room_type {
        None => errors.push(field, format!("{label} is required")),
        Some(t) if !form.requester.allows_room_type(t) => errors.push(
            field,
            format!(
                "{} rooms are not available to {} requesters",
                t.as_str(),
                form.requester.kind().label().to_lowercase()
            ),
        ),
        Some(_) => {}
    }
}

/// Check a candidate form against every submission rule. Pure: an empty
/// result means the form may be submitted.
pub fn validate(form: &RoomChangeForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if form.requester.is_staff() && form.requester.gender().is_none() {
        errors.push(fields::GENDER, "Gender is required");
    }

    let id = &form.identity;
    require(
        &mut errors,
        fields::REGISTRATION_OR_STAFF_ID,
        &id.registration_or_staff_id,
        if form.requester.is_staff() {
            "Staff number"
        } else {
            "Registration number"
        },
    );
    require(&mut errors, fields::FULL_NAME, &id.full_name, "Full name");
    require(&mut errors, fields::NATIONAL_ID, &id.national_id, "National ID");
    require(&mut errors, fields::CONTACT, &id.contact, "Contact number");
    if is_blank(&id.email) {
        errors.push(fields::EMAIL, "Email is required");
    } else if !is_valid_email(&id.email) {
        errors.push(fields::EMAIL, "Email address is invalid");
    }

    if form.requester.is_staff() {
        let staff = form.staff_details.clone().unwrap_or_default();
        require(&mut errors, fields::STAFF_ID, &staff.staff_id, "Staff ID");
        require(&mut errors, fields::DEPARTMENT, &staff.department, "Department");
        require(&mut errors, fields::DESIGNATION, &staff.designation, "Designation");
    }

    let current = &form.current_room;
    require(&mut errors, fields::CURRENT_HOSTEL, &current.hostel_name, "Current hostel");
    require(
        &mut errors,
        fields::CURRENT_ROOM_NUMBER,
        &current.room_number,
        "Current room number",
    );
    check_room_type(
        &mut errors,
        form,
        fields::CURRENT_ROOM_TYPE,
        current.room_type,
        "Current room type",
    );

    let requested = &form.requested_room;
    require(
        &mut errors,
        fields::REQUESTED_HOSTEL,
        &requested.hostel_name,
        "Requested hostel",
    );
    check_room_type(
        &mut errors,
        form,
        fields::REQUESTED_ROOM_TYPE,
        requested.room_type,
        "Requested room type",
    );

    match form.reason {
        None => errors.push(fields::REASON, "Reason is required"),
        Some(Reason::Other) => {
            if is_blank(form.other_reason_text.as_deref().unwrap_or("")) {
                errors.push(fields::OTHER_REASON_TEXT, "Please describe your reason");
            }
        }
        Some(_) => {}
    }

    if !form.agreement_accepted {
        errors.push(fields::AGREEMENT, "You must accept the agreement");
    }

    errors
}
