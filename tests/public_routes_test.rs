mod common;

use actix_web::test;
use serde_json::Value;
use serial_test::serial;

use tour_quote_api::services::policy::PricingPolicy;

use common::TestApp;

#[actix_rt::test]
async fn test_health_endpoint() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["fit_threshold"], 8);
}

#[actix_rt::test]
#[serial]
async fn test_health_reports_env_policy() {
    std::env::set_var("PRICING_FIT_THRESHOLD", "6");
    let policy = PricingPolicy::load().unwrap();
    std::env::remove_var("PRICING_FIT_THRESHOLD");

    let test_app = TestApp::with_policy(policy);
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["fit_threshold"], 6);
}

#[actix_rt::test]
async fn test_reference_tables() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/reference").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["vehicles"][0]["id"], "land-cruiser");
    assert_eq!(body["room_types"].as_array().unwrap().len(), 5);
    assert_eq!(body["meal_bases"].as_array().unwrap().len(), 5);
    assert_eq!(body["crew_roles"].as_array().unwrap().len(), 4);
}

#[actix_rt::test]
async fn test_method_not_allowed() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/profit-review").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status() == 404 || resp.status() == 405);
}
