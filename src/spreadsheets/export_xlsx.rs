use crate::domain::request::{RoomChangeRequest, RoomType};
use rust_xlsxwriter::{Workbook, Worksheet};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{0}")]
pub struct ExportError(pub String);

const HEADERS: [&str; 26] = [
    "Request Code",
    "ID",
    "Requester Type",
    "Gender",
    "Full Name",
    "Registration / Staff No",
    "National ID",
    "Contact",
    "Email",
    "Staff ID",
    "Department",
    "Designation",
    "Current Hostel",
    "Current Room",
    "Current Room Type",
    "Requested Hostel",
    "Requested Room",
    "Requested Room Type",
    "Reason",
    "Other Reason",
    "Priority",
    "Status",
    "Decision Message",
    "Rejection Reason",
    "Created At",
    "Comments",
];

fn write_text(ws: &mut Worksheet, row: u32, col: u16, value: &str) -> Result<(), ExportError> {
    ws.write_string(row, col, value)
        .map(|_| ())
        .map_err(|e| {
            ExportError(format!(
                "Failed to write '{}' row {row}: {e}",
                HEADERS[col as usize]
            ))
        })
}

fn room_type(t: Option<RoomType>) -> &'static str {
    t.map(RoomType::as_str).unwrap_or("")
}

/// One sheet: a header row, then one row per request in the order given.
pub fn export_requests_xlsx(requests: &[&RoomChangeRequest]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| ExportError(format!("Failed to write header '{}': {}", header, e)))?;
    }

    for (i, request) in requests.iter().enumerate() {
        let r = (i + 1) as u32;
        let staff = request.staff_details.clone().unwrap_or_default();
        let gender = request.requester.gender().map(|g| g.as_str()).unwrap_or("");

        write_text(worksheet, r, 0, &request.request_code)?;
        worksheet
            .write_number(r, 1, request.id as f64)
            .map_err(|e| ExportError(format!("Failed to write id: {}", e)))?;
        write_text(worksheet, r, 2, request.requester.kind().as_str())?;
        write_text(worksheet, r, 3, gender)?;
        write_text(worksheet, r, 4, &request.identity.full_name)?;
        write_text(worksheet, r, 5, &request.identity.registration_or_staff_id)?;
        write_text(worksheet, r, 6, &request.identity.national_id)?;
        write_text(worksheet, r, 7, &request.identity.contact)?;
        write_text(worksheet, r, 8, &request.identity.email)?;
        write_text(worksheet, r, 9, &staff.staff_id)?;
        write_text(worksheet, r, 10, &staff.department)?;
        write_text(worksheet, r, 11, &staff.designation)?;
        write_text(worksheet, r, 12, &request.current_room.hostel_name)?;
        write_text(worksheet, r, 13, &request.current_room.room_number)?;
        write_text(worksheet, r, 14, room_type(request.current_room.room_type))?;
        write_text(worksheet, r, 15, &request.requested_room.hostel_name)?;
        write_text(
            worksheet,
            r,
            16,
            request.requested_room.room_number.as_deref().unwrap_or(""),
        )?;
        write_text(worksheet, r, 17, room_type(request.requested_room.room_type))?;
        write_text(worksheet, r, 18, request.reason.as_str())?;
        write_text(worksheet, r, 19, request.other_reason_text.as_deref().unwrap_or(""))?;
        write_text(worksheet, r, 20, request.priority.as_str())?;
        write_text(worksheet, r, 21, request.status.as_str())?;
        write_text(worksheet, r, 22, request.decision_message.as_deref().unwrap_or(""))?;
        write_text(worksheet, r, 23, request.rejection_reason.as_deref().unwrap_or(""))?;
        write_text(
            worksheet,
            r,
            24,
            &request.created_at.format("%Y-%m-%d %H:%M").to_string(),
        )?;
        worksheet
            .write_number(r, 25, request.comments.len() as f64)
            .map_err(|e| ExportError(format!("Failed to write comment count: {}", e)))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ExportError(format!("Failed to save workbook: {}", e)))
}
