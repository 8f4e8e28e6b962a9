use crate::router::{handle, respond};
use crate::tests::utils::{init_test_db, read_json, request};
use serde_json::json;

#[test]
fn theme_defaults_to_light_and_persists() {
    let db = init_test_db();

    let mut resp = handle(request("GET", "/preferences/theme", None), &db).unwrap();
    assert_eq!(read_json(&mut resp), json!({ "darkMode": false }));

    let resp = handle(
        request("PUT", "/preferences/theme", Some(&json!({ "darkMode": true }))),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);

    let mut resp = handle(request("GET", "/preferences/theme", None), &db).unwrap();
    assert_eq!(read_json(&mut resp), json!({ "darkMode": true }));
}

#[test]
fn theme_update_needs_a_flag() {
    let db = init_test_db();
    let resp = respond(request("PUT", "/preferences/theme", None), &db);
    assert_eq!(resp.status(), 400);
}
