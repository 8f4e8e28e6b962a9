use crate::router::{handle, respond};
use crate::tests::utils::{init_test_db, read_body, request, sample_form_json};
use serde_json::json;

fn seed(db: &crate::db::Database) {
    handle(request("POST", "/roomchange", Some(&sample_form_json())), db).unwrap();

    let mut other = sample_form_json();
    other["requesterType"] = json!("student-female");
    other["identity"]["fullName"] = json!("Nimali Silva");
    other["identity"]["registrationOrStaffId"] = json!("2023/CS/002");
    other["priority"] = json!("Urgent");
    handle(request("POST", "/roomchange", Some(&other)), db).unwrap();
}

#[test]
fn review_page_lists_requests_and_summary() {
    let db = init_test_db();
    seed(&db);

    let mut resp = handle(request("GET", "/admin/roomchange", None), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let html = String::from_utf8(read_body(&mut resp)).unwrap();
    assert!(html.contains("Saman Perera"));
    assert!(html.contains("Nimali Silva"));
}

#[test]
fn review_page_applies_query_filters() {
    let db = init_test_db();
    seed(&db);

    let uri = "/admin/roomchange?search=nimali&priority=Urgent";
    let mut resp = handle(request("GET", uri, None), &db).unwrap();
    let html = String::from_utf8(read_body(&mut resp)).unwrap();
    assert!(html.contains("Nimali Silva"));
    assert!(!html.contains("Saman Perera"));
}

#[test]
fn review_page_uses_stored_theme() {
    let db = init_test_db();
    handle(
        request("PUT", "/preferences/theme", Some(&json!({ "darkMode": true }))),
        &db,
    )
    .unwrap();

    let mut resp = handle(request("GET", "/admin/roomchange", None), &db).unwrap();
    let html = String::from_utf8(read_body(&mut resp)).unwrap();
    assert!(html.contains(r#"data-theme="dark""#));
}

#[test]
fn export_returns_a_workbook() {
    let db = init_test_db();
    seed(&db);

    let uri = "/admin/roomchange/export?category=student-male";
    let mut resp = handle(request("GET", uri, None), &db).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["Content-Type"],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );

    // xlsx files are zip archives
    let bytes = read_body(&mut resp);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn admin_errors_render_html() {
    let db = init_test_db();
    let mut resp = respond(request("GET", "/admin/nothing-here", None), &db);
    assert_eq!(resp.status(), 404);

    let html = String::from_utf8(read_body(&mut resp)).unwrap();
    assert!(html.contains("<h1>Error 404</h1>"));
}
