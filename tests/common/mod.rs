use actix_web::{web, App};
use serde_json::{json, Value};

use tour_quote_api::{
    routes,
    services::{policy::PricingPolicy, pricing_service::PricingService},
};

pub struct TestApp {
    pub service: web::Data<PricingService>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_policy(PricingPolicy::default())
    }

    pub fn with_policy(policy: PricingPolicy) -> Self {
        let service = PricingService::new(policy).expect("default keywords compile");
        Self {
            service: web::Data::new(service),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.service.clone())
            .configure(routes::configure)
    }
}

/// Seven-day, eight-person Land Cruiser trip with a driver and a guide.
pub fn estimate_body() -> Value {
    json!({
        "trip": {
            "duration": 7,
            "distance": 1200.0,
            "current_pax": 8,
            "min_pax": 2,
            "max_pax": 16,
            "fuel_price": 2.5
        },
        "vehicle": { "kind": "table", "id": "land-cruiser" },
        "crew": [
            { "role": "driver", "daily_rate": 120.0, "accommodation_rate": 60.0, "meal_allowance": 30.0 },
            { "role": "guide", "daily_rate": 150.0, "accommodation_rate": 60.0, "meal_allowance": 30.0 }
        ],
        "accommodation": { "average_cost": 120.0 },
        "markups": { "vehicle": 15.0, "accommodation": 10.0 }
    })
}

pub fn itinerary_body() -> Value {
    json!([
        {
            "day": 1,
            "date": "2025-07-01",
            "accommodation": "Arusha Hotel",
            "meals": { "dinner": true },
            "activities": ["Airport transfer"]
        },
        {
            "day": 2,
            "date": "2025-07-02",
            "accommodation": "Luxury Tented Camp",
            "meals": { "breakfast": true, "lunch": true, "dinner": true },
            "activities": ["Private safari in Tarangire National Park"]
        },
        {
            "day": 3,
            "date": "2025-07-03",
            "accommodation": "",
            "meals": { "breakfast": true },
            "activities": ["Departure"]
        }
    ])
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
