use crate::client::{ApiResponse, ClientError, Method, Transport};
use crate::db::connection::{init_db, Database};
use crate::domain::request::{
    CurrentRoom, Identity, Priority, Reason, RequestedRoom, RequesterType, RoomChangeForm,
    RoomType,
};
use crate::router;
use astra::{Body, Request, Response};
use serde_json::Value;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

/// Fresh temp-file database per call, initialised from the production schema.
pub fn init_test_db() -> Database {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let path = std::env::temp_dir().join(format!(
        "hostel_desk_test_{}_{}_{nanos}.sqlite",
        std::process::id(),
        NEXT_DB.fetch_add(1, Ordering::SeqCst),
    ));

    let db = Database::new(path.to_string_lossy().into_owned());
    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    db
}

pub fn request(method: &str, uri: &str, body: Option<&Value>) -> Request {
    let body = match body {
        Some(v) => Body::from(v.to_string()),
        None => Body::empty(),
    };
    http::Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
        .expect("valid test request")
}

pub fn read_body(resp: &mut Response) -> Vec<u8> {
    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .expect("readable body");
    bytes
}

pub fn read_json(resp: &mut Response) -> Value {
    serde_json::from_slice(&read_body(resp)).expect("JSON body")
}

/// Hands requests straight to the router, in-process.
#[derive(Clone)]
pub struct RouterTransport {
    pub db: Database,
}

impl RouterTransport {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }
}

impl Transport for RouterTransport {
    fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse, ClientError> {
        let uri = format!("/{}", path.trim_start_matches('/'));
        let mut resp = router::respond(request(method.as_str(), &uri, body), &self.db);
        Ok(ApiResponse {
            status: resp.status().as_u16(),
            body: read_body(&mut resp),
        })
    }
}

/// Saman Perera moving from Block A to Block B.
pub fn sample_form() -> RoomChangeForm {
    RoomChangeForm {
        requester: RequesterType::StudentMale,
        identity: Identity {
            registration_or_staff_id: "2023/CS/001".into(),
            full_name: "Saman Perera".into(),
            national_id: "200112345678".into(),
            contact: "0771234567".into(),
            email: "saman.perera@uni.lk".into(),
        },
        current_room: CurrentRoom {
            hostel_name: "Block A".into(),
            room_number: "101".into(),
            room_type: Some(RoomType::Shared),
        },
        requested_room: RequestedRoom {
            hostel_name: "Block B".into(),
            room_number: None,
            room_type: Some(RoomType::Single),
        },
        reason: Some(Reason::RoommateIssues),
        priority: Priority::Normal,
        agreement_accepted: true,
        ..RoomChangeForm::default()
    }
}

pub fn sample_form_json() -> Value {
    serde_json::to_value(sample_form()).expect("serializable form")
}
