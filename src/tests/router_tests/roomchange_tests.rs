use crate::router::{handle, respond};
use crate::tests::utils::{init_test_db, read_json, request, sample_form_json};
use serde_json::json;

fn create(db: &crate::db::Database) -> i64 {
    let mut resp = handle(request("POST", "/roomchange", Some(&sample_form_json())), db)
        .expect("create should succeed");
    assert_eq!(resp.status(), 201);
    read_json(&mut resp)["id"].as_i64().expect("numeric id")
}

#[test]
fn create_returns_pending_record_with_generated_code() {
    let db = init_test_db();
    let mut resp = handle(request("POST", "/roomchange", Some(&sample_form_json())), &db).unwrap();
    assert_eq!(resp.status(), 201);

    let body = read_json(&mut resp);
    assert_eq!(body["status"], "Pending");
    assert_eq!(body["requesterType"], "student-male");
    assert_eq!(body["gender"], "Male");
    assert_eq!(body["identity"]["fullName"], "Saman Perera");
    assert!(body["requestCode"].as_str().unwrap().starts_with("SMB-M-"));
}

#[test]
fn create_keeps_client_supplied_code() {
    let db = init_test_db();
    let mut form = sample_form_json();
    form["requestCode"] = json!("SMB-M-123456");

    let mut resp = handle(request("POST", "/roomchange", Some(&form)), &db).unwrap();
    assert_eq!(read_json(&mut resp)["requestCode"], "SMB-M-123456");
}

#[test]
fn invalid_form_is_rejected_with_field_errors() {
    let db = init_test_db();
    let mut form = sample_form_json();
    form["reason"] = json!("Other");
    form["agreementAccepted"] = json!(false);

    let mut resp = respond(request("POST", "/roomchange", Some(&form)), &db);
    assert_eq!(resp.status(), 400);

    let body = read_json(&mut resp);
    assert_eq!(body["message"], "Please correct the highlighted fields");
    assert!(body["errors"]["otherReasonText"].is_string());
    assert!(body["errors"]["agreementAccepted"].is_string());
}

#[test]
fn malformed_json_is_a_bad_request() {
    let db = init_test_db();
    let req = http::Request::builder()
        .method("POST")
        .uri("/roomchange")
        .body(astra::Body::from(String::from("{not json")))
        .unwrap();

    let resp = respond(req, &db);
    assert_eq!(resp.status(), 400);
}

#[test]
fn display_lists_newest_first() {
    let db = init_test_db();
    let first = create(&db);
    let second = create(&db);

    let mut resp = handle(request("GET", "/roomchange/display", None), &db).unwrap();
    let body = read_json(&mut resp);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![second, first]);
}

#[test]
fn approve_then_reject_conflicts() {
    let db = init_test_db();
    let id = create(&db);

    let mut resp = handle(
        request(
            "PUT",
            &format!("/roomchange/approve/{id}"),
            Some(&json!({ "message": "Welcome to Block B" })),
        ),
        &db,
    )
    .unwrap();
    let body = read_json(&mut resp);
    assert_eq!(body["status"], "Approved");
    assert_eq!(body["decisionMessage"], "Welcome to Block B");

    let mut resp = respond(
        request(
            "PUT",
            &format!("/roomchange/reject/{id}"),
            Some(&json!({ "reason": "Too late" })),
        ),
        &db,
    );
    assert_eq!(resp.status(), 409);
    assert_eq!(
        read_json(&mut resp)["message"],
        "cannot reject a request that is already Approved"
    );
}

#[test]
fn approve_accepts_an_empty_body() {
    let db = init_test_db();
    let id = create(&db);

    let resp = handle(request("PUT", &format!("/roomchange/approve/{id}"), None), &db).unwrap();
    assert_eq!(resp.status(), 200);
}

#[test]
fn reject_requires_a_reason() {
    let db = init_test_db();
    let id = create(&db);

    let resp = respond(
        request("PUT", &format!("/roomchange/reject/{id}"), Some(&json!({ "reason": "  " }))),
        &db,
    );
    assert_eq!(resp.status(), 400);

    let mut resp = handle(request("GET", "/roomchange/display", None), &db).unwrap();
    assert_eq!(read_json(&mut resp)[0]["status"], "Pending");
}

#[test]
fn reject_stores_the_reason() {
    let db = init_test_db();
    let id = create(&db);

    let mut resp = handle(
        request(
            "PUT",
            &format!("/roomchange/reject/{id}"),
            Some(&json!({ "reason": "No vacancies in Block B" })),
        ),
        &db,
    )
    .unwrap();
    let body = read_json(&mut resp);
    assert_eq!(body["status"], "Rejected");
    assert_eq!(body["rejectionReason"], "No vacancies in Block B");
}

#[test]
fn delete_removes_and_second_delete_is_not_found() {
    let db = init_test_db();
    let id = create(&db);

    let mut resp =
        handle(request("DELETE", &format!("/roomchange/delete/{id}"), None), &db).unwrap();
    assert_eq!(read_json(&mut resp)["message"], "Room change request deleted");

    let resp = respond(request("DELETE", &format!("/roomchange/delete/{id}"), None), &db);
    assert_eq!(resp.status(), 404);

    let mut resp = handle(request("GET", "/roomchange/display", None), &db).unwrap();
    assert_eq!(read_json(&mut resp), json!([]));
}

#[test]
fn comments_are_appended_oldest_first_without_touching_status() {
    let db = init_test_db();
    let id = create(&db);

    for text in ["Checking with the warden", "Block B has a vacancy"] {
        let resp = handle(
            request(
                "POST",
                "/roomchange/comment",
                Some(&json!({ "requestId": id, "comment": text, "commentedBy": "warden" })),
            ),
            &db,
        )
        .unwrap();
        assert_eq!(resp.status(), 201);
    }

    let mut resp = handle(request("GET", &format!("/roomchange/comment/{id}"), None), &db).unwrap();
    let thread = read_json(&mut resp);
    assert_eq!(thread[0]["text"], "Checking with the warden");
    assert_eq!(thread[1]["text"], "Block B has a vacancy");
    assert_eq!(thread[1]["author"], "warden");

    let mut resp = handle(request("GET", "/roomchange/display", None), &db).unwrap();
    let list = read_json(&mut resp);
    assert_eq!(list[0]["status"], "Pending");
    assert_eq!(list[0]["comments"].as_array().unwrap().len(), 2);
}

#[test]
fn empty_comment_and_unknown_request_are_refused() {
    let db = init_test_db();
    let id = create(&db);

    let resp = respond(
        request(
            "POST",
            "/roomchange/comment",
            Some(&json!({ "requestId": id, "comment": " ", "commentedBy": "warden" })),
        ),
        &db,
    );
    assert_eq!(resp.status(), 400);

    let resp = respond(
        request(
            "POST",
            "/roomchange/comment",
            Some(&json!({ "requestId": id + 100, "comment": "hello", "commentedBy": "warden" })),
        ),
        &db,
    );
    assert_eq!(resp.status(), 404);
}

#[test]
fn unknown_routes_and_bad_ids() {
    let db = init_test_db();

    let mut resp = respond(request("GET", "/nowhere", None), &db);
    assert_eq!(resp.status(), 404);
    assert!(read_json(&mut resp)["message"].is_string());

    let resp = respond(request("PUT", "/roomchange/approve/abc", None), &db);
    assert_eq!(resp.status(), 400);
}
