mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};

#[actix_web::test]
async fn test_health_returns_empty_ok() {
    println!("\n\n[+] Running test: test_health_returns_empty_ok");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    println!("[/] Test passed: health endpoint responds.");
}
