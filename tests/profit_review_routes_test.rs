mod common;

use actix_web::test;
use serde_json::{json, Value};

use common::{assert_close, itinerary_body, TestApp};

#[actix_rt::test]
async fn test_baseline_single_day() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/profit-review")
        .set_json(json!({
            "mode": "baseline",
            "start_date": "2025-06-01",
            "end_date": "2025-06-01",
            "base_rate": 320.0,
            "passenger_count": 6
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["per_day"].as_array().unwrap().len(), 1);
    assert_close(body["total_revenue"].as_f64().unwrap(), 1920.0);
    assert_eq!(body["min_profit_per_day"], body["total_profit"]);
    assert_eq!(body["categories"].as_array().unwrap().len(), 8);
    assert!(body.get("daily_fuel_in").is_none());
}

#[actix_rt::test]
async fn test_baseline_rejects_reversed_dates() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/profit-review")
        .set_json(json!({
            "mode": "baseline",
            "start_date": "2025-06-05",
            "end_date": "2025-06-01",
            "base_rate": 320.0,
            "passenger_count": 6
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
async fn test_itinerary_review() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/profit-review")
        .set_json(json!({
            "mode": "itinerary",
            "itinerary": itinerary_body(),
            "base_rate": 400.0,
            "pax": 2,
            "currency_rate": 2.0,
            "daily_fuel_in": 35.0
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    let per_day = body["per_day"].as_array().unwrap();
    assert_eq!(per_day.len(), 3);

    // day 2 is a private activity: 400 * 2 * 1.5, then converted
    assert_close(per_day[1]["revenue"].as_f64().unwrap(), 2400.0);
    assert_close(per_day[0]["revenue"].as_f64().unwrap(), 1600.0);

    let category_sum: f64 = body["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["total"].as_f64().unwrap())
        .sum();
    assert_close(body["total_expense"].as_f64().unwrap(), category_sum);
    assert_close(body["daily_fuel_in"].as_f64().unwrap(), 70.0);
}

#[actix_rt::test]
async fn test_unknown_mode_is_bad_request() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/profit-review")
        .set_json(json!({ "mode": "forecast" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
async fn test_baseline_rejects_unbounded_range() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/profit-review")
        .set_json(json!({
            "mode": "baseline",
            "start_date": "0001-01-01",
            "end_date": "9999-12-31",
            "base_rate": 320.0,
            "passenger_count": 6
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}
