use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::env;

use crate::services::pricing_service::PricingService;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    environment: String,
    version: String,
    fit_threshold: u32,
}

pub async fn health_check(service: web::Data<PricingService>) -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "ok".to_string(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
        fit_threshold: service.policy().fit_threshold,
    })
}
