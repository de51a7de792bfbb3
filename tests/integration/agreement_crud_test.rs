// Integration tests for the agreement resource.

use actix_web::{http::header, test, App};
use serde_json::{json, Value};

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::{TestDataFactory, TestRepos};

#[actix_web::test]
async fn test_full_agreement_lifecycle() {
    let repos = TestRepos::new();
    let app =
        test::init_service(App::new().configure(|cfg| repos.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/api/agreements")
        .set_json(TestDataFactory::agreement_payload("AGR-2025-001"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    assert_eq!(
        resp.headers()
            .get(header::LOCATION)
            .and_then(|h| h.to_str().ok()),
        Some("/api/agreements/1")
    );

    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["id"], json!(1));
    assert_eq!(created["number"], json!("AGR-2025-001"));
    assert_eq!(created["start_date"], json!("2025-01-01"));
    assert_eq!(created["monthly_rent"], json!("950.00"));

    // whole-record replace under the same id
    let mut replacement = created.clone();
    replacement["tenant_name"] = json!("K. Tenant");
    let req = test::TestRequest::put()
        .uri("/api/agreements")
        .set_json(replacement)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::get()
        .uri("/api/agreements/1")
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["tenant_name"], json!("K. Tenant"));

    let req = test::TestRequest::delete()
        .uri("/api/agreements/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::get()
        .uri("/api/agreements/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_agreement_id_guards() {
    let repos = TestRepos::new();
    let app =
        test::init_service(App::new().configure(|cfg| repos.configure(cfg))).await;

    let mut payload = TestDataFactory::agreement_payload("AGR-2025-002");
    payload["id"] = json!(4);
    let req = test::TestRequest::post()
        .uri("/api/agreements")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["entity"], json!("agreement"));
    assert_eq!(body["error"]["key"], json!("idexists"));

    let req = test::TestRequest::put()
        .uri("/api/agreements")
        .set_json(TestDataFactory::agreement_payload("AGR-2025-003"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["key"], json!("idnull"));
}

#[actix_web::test]
async fn test_inverted_date_range_is_rejected() {
    let repos = TestRepos::new();
    let app =
        test::init_service(App::new().configure(|cfg| repos.configure(cfg))).await;

    let mut payload = TestDataFactory::agreement_payload("AGR-2025-004");
    payload["start_date"] = json!("2025-12-31");
    payload["end_date"] = json!("2025-01-01");

    let req = test::TestRequest::post()
        .uri("/api/agreements")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_list_returns_all_agreements() {
    let repos = TestRepos::new();
    let app =
        test::init_service(App::new().configure(|cfg| repos.configure(cfg))).await;

    for number in ["AGR-1", "AGR-2", "AGR-3"] {
        let req = test::TestRequest::post()
            .uri("/api/agreements")
            .set_json(TestDataFactory::agreement_payload(number))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
    }

    let req = test::TestRequest::get().uri("/api/agreements").to_request();
    let listed: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.len(), 3);
}
