use crate::router::{handle, respond};
use crate::tests::utils::{init_test_db, read_json, request};
use serde_json::json;

fn room(number: &str) -> serde_json::Value {
    json!({
        "hostelName": "Block B",
        "roomNumber": number,
        "roomType": "Single",
        "capacity": 1,
        "floor": "2"
    })
}

#[test]
fn add_list_update_delete() {
    let db = init_test_db();

    let mut resp = handle(request("POST", "/roomdetails/add", Some(&room("201"))), &db).unwrap();
    assert_eq!(resp.status(), 201);
    let id = read_json(&mut resp)["id"].as_i64().unwrap();

    let mut update = room("201");
    update["roomType"] = json!("Shared");
    update["capacity"] = json!(2);
    update["occupied"] = json!(1);
    let mut resp = handle(
        request("PUT", &format!("/roomdetails/update/{id}"), Some(&update)),
        &db,
    )
    .unwrap();
    let body = read_json(&mut resp);
    assert_eq!(body["roomType"], "Shared");
    assert_eq!(body["occupied"], 1);

    let mut resp = handle(request("GET", "/roomdetails/display", None), &db).unwrap();
    assert_eq!(read_json(&mut resp).as_array().unwrap().len(), 1);

    let resp = handle(request("DELETE", &format!("/roomdetails/delete/{id}"), None), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let resp = respond(request("DELETE", &format!("/roomdetails/delete/{id}"), None), &db);
    assert_eq!(resp.status(), 404);
}

#[test]
fn duplicate_room_conflicts() {
    let db = init_test_db();
    handle(request("POST", "/roomdetails/add", Some(&room("202"))), &db).unwrap();

    let resp = respond(request("POST", "/roomdetails/add", Some(&room("202"))), &db);
    assert_eq!(resp.status(), 409);
}

#[test]
fn invalid_room_is_rejected() {
    let db = init_test_db();
    let mut bad = room("203");
    bad["capacity"] = json!(0);

    let mut resp = respond(request("POST", "/roomdetails/add", Some(&bad)), &db);
    assert_eq!(resp.status(), 400);
    assert!(read_json(&mut resp)["errors"]["capacity"].is_string());
}

#[test]
fn update_of_missing_room_is_not_found() {
    let db = init_test_db();
    let resp = respond(request("PUT", "/roomdetails/update/99", Some(&room("204"))), &db);
    assert_eq!(resp.status(), 404);
}
