mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};

#[actix_web::test]
async fn test_update_writes_only_changed_fields() {
    println!("\n\n[+] Running test: test_update_writes_only_changed_fields");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let team_id = client.create_test_team("Avengers").await;
    let created = client.create_test_person("Alice", 30, team_id).await;

    // name is a zero value, age equals current: only team_id may be written.
    let other_team = client.create_test_team("X-Men").await;
    let req = test::TestRequest::put()
        .uri(&format!("/person/{}", created.uid))
        .set_json(serde_json::json!({ "name": "", "age": 30, "team_id": other_team }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "updated");

    let req = test::TestRequest::get()
        .uri(&format!("/person/{}", created.uid))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Alice");
    assert_eq!(body["age"], 30);
    assert_eq!(body["team_id"], other_team);
    println!("[/] Test passed: only the differing non-zero field was written.");
}

#[actix_web::test]
async fn test_update_of_all_zero_values_is_a_noop() {
    println!("\n\n[+] Running test: test_update_of_all_zero_values_is_a_noop");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let created = client.create_test_person("Alice", 30, 1).await;

    let req = test::TestRequest::put()
        .uri(&format!("/person/{}", created.uid))
        .set_json(serde_json::json!({ "name": "", "age": 0, "team_id": 0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "nothing to change");

    let req = test::TestRequest::get()
        .uri(&format!("/person/{}", created.uid))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Alice");
    assert_eq!(body["age"], 30);
    assert_eq!(body["team_id"], 1);
    println!("[/] Test passed: all-zero payload changed nothing.");
}

#[actix_web::test]
async fn test_update_with_omitted_fields_decodes_to_zero_values() {
    println!("\n\n[+] Running test: test_update_with_omitted_fields_decodes_to_zero_values");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let created = client.create_test_person("Alice", 30, 0).await;

    // Omitted fields behave exactly like explicit zero values.
    let req = test::TestRequest::put()
        .uri(&format!("/person/{}", created.uid))
        .set_json(serde_json::json!({ "age": 31 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/person/{}", created.uid))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Alice");
    assert_eq!(body["age"], 31);
    println!("[/] Test passed: omitted fields left untouched.");
}

#[actix_web::test]
async fn test_update_missing_person_returns_not_found() {
    println!("\n\n[+] Running test: test_update_missing_person_returns_not_found");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::put()
        .uri("/person/9ZZ")
        .set_json(serde_json::json!({ "name": "Ghost" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    println!("[/] Test passed: updating a missing person is a 404.");
}
